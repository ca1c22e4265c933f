#[cfg(test)]
mod tests_comparison {
    use postjoin_rs::{
        Comment, ComparisonReport, Post, RecordingTimingSink, StrategyKind, compare_strategies,
    };

    fn placeholder_shaped(post_count: u64) -> (Vec<Post<()>>, Vec<Comment<()>>) {
        let posts = (1..=post_count).map(Post::new).collect();
        let comments = (1..=post_count)
            .flat_map(|post_id| (0..5).map(move |n| Comment::new(post_id, format!("{post_id}-{n}"))))
            .collect();
        (posts, comments)
    }

    #[test]
    fn timings_are_recorded_per_strategy_in_run_order() {
        let (posts, comments) = placeholder_shaped(20);
        let sink = RecordingTimingSink::new();

        let outcomes = compare_strategies(&posts, &comments, &sink);

        assert_eq!(outcomes.len(), 3);
        let timings = sink.timings();
        assert_eq!(timings.len(), 3);
        for ((outcome, timing), kind) in outcomes.iter().zip(&timings).zip(StrategyKind::ALL) {
            assert_eq!(outcome.strategy, kind);
            assert_eq!(outcome.label, timing.label);
            assert_eq!(outcome.elapsed, timing.elapsed);
            assert_eq!(outcome.output.len(), posts.len());
        }
    }

    #[test]
    fn report_pins_keyed_object_divergence_on_placeholder_layout() {
        let (posts, comments) = placeholder_shaped(10);
        let sink = RecordingTimingSink::new();

        let outcomes = compare_strategies(&posts, &comments, &sink);
        let report = ComparisonReport::from_outcomes(&outcomes);

        assert_eq!(report.divergent(), vec![StrategyKind::KeyedObject]);
        assert_eq!(report.entries[0].divergence, None);
        assert_eq!(report.entries[1].divergence, None);
        assert_eq!(report.entries[2].divergence, Some(0));
        assert!(report.entries.iter().all(|entry| entry.matched == 10));

        assert_eq!(outcomes[0].output[0].comment.as_deref(), Some("1-0"));
        assert_eq!(outcomes[2].output[0].comment.as_deref(), Some("1-4"));
    }

    #[test]
    fn report_fastest_is_one_of_the_entries() {
        let (posts, comments) = placeholder_shaped(50);
        let sink = RecordingTimingSink::new();

        let report = ComparisonReport::from_outcomes(&compare_strategies(&posts, &comments, &sink));
        let fastest = report.fastest().expect("three entries");
        assert!(StrategyKind::ALL.contains(&fastest));
    }
}
