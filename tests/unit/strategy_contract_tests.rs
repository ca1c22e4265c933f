#[cfg(test)]
mod tests_strategy_contract {
    use postjoin_rs::{
        Comment, DefaultJoinedPost, GroupedMap, JoinStrategy, KeyedObject, LinearScan, Post,
        StrategyKind, TieBreak,
    };
    use serde_json::{Value, json};

    fn parse_posts(value: Value) -> Vec<Post> {
        serde_json::from_value(value).expect("valid posts")
    }

    fn parse_comments(value: Value) -> Vec<Comment> {
        serde_json::from_value(value).expect("valid comments")
    }

    fn render(joined: &[DefaultJoinedPost]) -> Value {
        serde_json::to_value(joined).expect("serializable output")
    }

    #[test]
    fn first_match_and_last_match_on_shared_post_id() {
        let posts = parse_posts(json!([{"id": 1}, {"id": 2}]));
        let comments = parse_comments(json!([
            {"postId": 1, "body": "a"},
            {"postId": 1, "body": "b"}
        ]));

        let first_match = json!([{"id": 1, "comment": "a"}, {"id": 2}]);
        let last_match = json!([{"id": 1, "comment": "b"}, {"id": 2}]);

        assert_eq!(render(&LinearScan.join(&posts, &comments)), first_match);
        assert_eq!(render(&GroupedMap.join(&posts, &comments)), first_match);
        assert_eq!(render(&KeyedObject::new().join(&posts, &comments)), last_match);
        assert_eq!(
            render(&KeyedObject::first_wins().join(&posts, &comments)),
            first_match
        );
    }

    #[test]
    fn empty_comments_return_posts_verbatim() {
        let raw = json!([
            {"userId": 1, "id": 1, "title": "one", "body": "first"},
            {"userId": 2, "id": 2, "title": "two", "body": "second"}
        ]);
        let posts = parse_posts(raw.clone());
        let comments: Vec<Comment> = Vec::new();

        for kind in StrategyKind::ALL {
            assert_eq!(render(&kind.join(&posts, &comments)), raw, "{kind}");
        }
    }

    #[test]
    fn unmatched_post_has_no_comment_key_at_all() {
        let posts = parse_posts(json!([{"id": 5, "title": "lonely"}]));
        let comments = parse_comments(json!([{"postId": 6, "body": "elsewhere"}]));

        for kind in StrategyKind::ALL {
            let output = render(&kind.join(&posts, &comments));
            let record = output[0].as_object().expect("object");
            assert!(!record.contains_key("comment"), "{kind} added a comment key");
        }
    }

    #[test]
    fn output_follows_post_order_not_comment_order() {
        let posts = parse_posts(json!([{"id": 3}, {"id": 1}, {"id": 2}]));
        let comments = parse_comments(json!([
            {"postId": 1, "body": "one"},
            {"postId": 2, "body": "two"},
            {"postId": 3, "body": "three"}
        ]));

        for kind in StrategyKind::ALL {
            let joined = kind.join(&posts, &comments);
            let ids: Vec<_> = joined.iter().map(|j| j.id()).collect();
            assert_eq!(ids, vec![3, 1, 2]);
            let bodies: Vec<_> = joined.iter().map(|j| j.comment.as_deref()).collect();
            assert_eq!(bodies, vec![Some("three"), Some("one"), Some("two")]);
        }
    }

    #[test]
    fn strategies_report_their_tie_breaks() {
        assert_eq!(LinearScan.tie_break(), TieBreak::FirstMatch);
        assert_eq!(GroupedMap.tie_break(), TieBreak::FirstMatch);
        assert_eq!(KeyedObject::new().tie_break(), TieBreak::LastMatch);
        assert_eq!(KeyedObject::first_wins().tie_break(), TieBreak::FirstMatch);
    }

    #[test]
    fn repeated_joins_are_identical() {
        let posts = parse_posts(json!([{"id": 1}, {"id": 2}, {"id": 3}]));
        let comments = parse_comments(json!([
            {"postId": 2, "body": "x"},
            {"postId": 2, "body": "y"},
            {"postId": 3, "body": "z"}
        ]));

        for kind in StrategyKind::ALL {
            assert_eq!(kind.join(&posts, &comments), kind.join(&posts, &comments));
        }
    }
}
