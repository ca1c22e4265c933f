#[cfg(test)]
mod tests_fetch_join {
    use postjoin_rs::{
        ComparisonReport, DataSource, FetchError, RecordingTimingSink, StrategyKind,
        compare_strategies,
    };
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(server: &MockServer, route: &str, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(template)
            .mount(server)
            .await;
    }

    fn source_for(server: &MockServer) -> DataSource {
        DataSource::new(
            format!("{}/posts", server.uri()),
            format!("{}/comments", server.uri()),
        )
    }

    #[tokio::test]
    async fn fetched_collections_feed_every_strategy() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/posts",
            ResponseTemplate::new(200).set_body_json(json!([
                {"userId": 1, "id": 1, "title": "t1", "body": "b1"},
                {"userId": 1, "id": 2, "title": "t2", "body": "b2"},
                {"userId": 2, "id": 3, "title": "t3", "body": "b3"}
            ])),
        )
        .await;
        serve(
            &server,
            "/comments",
            ResponseTemplate::new(200).set_body_json(json!([
                {"postId": 1, "id": 1, "name": "n1", "email": "a@x", "body": "c1"},
                {"postId": 3, "id": 2, "name": "n2", "email": "b@x", "body": "c2"}
            ])),
        )
        .await;

        let dataset = source_for(&server)
            .fetch_default()
            .await
            .expect("fetch succeeds");
        assert_eq!(dataset.posts.len(), 3);
        assert_eq!(dataset.comments.len(), 2);

        let sink = RecordingTimingSink::new();
        let outcomes = compare_strategies(&dataset.posts, &dataset.comments, &sink);
        let report = ComparisonReport::from_outcomes(&outcomes);
        assert!(report.all_agree());

        let rendered = serde_json::to_value(&outcomes[0].output).expect("serializable");
        assert_eq!(
            rendered,
            json!([
                {"userId": 1, "id": 1, "title": "t1", "body": "b1", "comment": "c1"},
                {"userId": 1, "id": 2, "title": "t2", "body": "b2"},
                {"userId": 2, "id": 3, "title": "t3", "body": "b3", "comment": "c2"}
            ])
        );
        assert_eq!(outcomes[0].strategy, StrategyKind::LinearScan);
    }

    #[tokio::test]
    async fn failing_posts_endpoint_abandons_the_run() {
        let server = MockServer::start().await;
        serve(&server, "/posts", ResponseTemplate::new(404)).await;
        serve(&server, "/comments", ResponseTemplate::new(200).set_body_json(json!([]))).await;

        let result = source_for(&server).fetch_default().await;

        match result {
            Err(FetchError::Request { resource, .. }) => assert_eq!(resource, "posts"),
            other => panic!("expected posts request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn comment_without_body_is_a_decode_error() {
        let server = MockServer::start().await;
        serve(&server, "/posts", ResponseTemplate::new(200).set_body_json(json!([{"id": 1}]))).await;
        serve(
            &server,
            "/comments",
            ResponseTemplate::new(200).set_body_json(json!([{"postId": 1}])),
        )
        .await;

        let err = source_for(&server)
            .fetch_default()
            .await
            .expect_err("comment is missing its body");
        assert_eq!(err.resource(), "comments");
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
