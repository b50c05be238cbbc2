use jobsearch_core::IndexServiceConfig;
use jobsearch_query::{JobsSearch, QueryError, SearchCriteria};

use crate::common::{
    BROKEN_INDEX, MALFORMED_HIGHLIGHTS, MALFORMED_SUGGESTION, MISSING_INDEX, StubServer,
};

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let server = StubServer::start().await;
    let config = server.config_with_jobs_index(BROKEN_INDEX);
    let search = JobsSearch::from_init(jobsearch_azure::connect(&config));

    let err = search.search(&SearchCriteria::new("x")).await.unwrap_err();
    assert!(matches!(err, QueryError::TransportFailure { .. }));
    let message = err.to_string();
    assert!(message.contains("500"), "{message}");
    assert!(message.contains("index unavailable"), "{message}");

    // A 500 on lookup is a failure, not a missing document.
    let err = search.look_up("87990").await.unwrap_err();
    assert!(matches!(err, QueryError::TransportFailure { .. }));
}

#[tokio::test]
async fn test_missing_index_lookup_is_transport_failure() {
    let server = StubServer::start().await;
    let config = server.config_with_jobs_index(MISSING_INDEX);
    let search = JobsSearch::from_init(jobsearch_azure::connect(&config));

    // Both answers are 404; only the error body tells the missing index apart.
    let err = search.look_up("87990").await.unwrap_err();
    assert!(matches!(err, QueryError::TransportFailure { .. }));
    let message = err.to_string();
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("was not found"), "{message}");
    assert_eq!(server.lookups(), vec![format!("{MISSING_INDEX}/87990")]);
}

#[tokio::test]
async fn test_malformed_highlights_are_transport_failure() {
    let server = StubServer::start().await;
    let search = JobsSearch::from_init(jobsearch_azure::connect(&server.config()));

    let err = search
        .search(&SearchCriteria::new(MALFORMED_HIGHLIGHTS))
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::TransportFailure { .. }));
    assert!(err.to_string().contains("@search.highlights"));
}

#[tokio::test]
async fn test_malformed_suggestion_is_transport_failure() {
    let server = StubServer::start().await;
    let search = JobsSearch::from_init(jobsearch_azure::connect(&server.config()));

    let err = search
        .suggest(MALFORMED_SUGGESTION, false)
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::TransportFailure { .. }));
}

#[tokio::test]
async fn test_wrong_api_key_is_transport_failure() {
    let server = StubServer::start().await;
    let config = IndexServiceConfig {
        api_key: "wrong".to_string(),
        ..server.config()
    };
    let search = JobsSearch::from_init(jobsearch_azure::connect(&config));

    let err = search.suggest("acc", false).await.unwrap_err();
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = IndexServiceConfig {
        api_key: "k".to_string(),
        endpoint: Some(endpoint),
        timeout_secs: 5,
        ..Default::default()
    };
    let search = JobsSearch::from_init(jobsearch_azure::connect(&config));

    let err = search.look_up("1").await.unwrap_err();
    assert!(err.is_service_failure());
}

#[tokio::test]
async fn test_invalid_config_leaves_facade_unavailable() {
    let config = IndexServiceConfig::default();
    let search = JobsSearch::from_init(jobsearch_azure::connect(&config));

    assert!(!search.state().is_ready());
    let err = search.search(&SearchCriteria::new("x")).await.unwrap_err();
    assert!(matches!(err, QueryError::Unavailable { .. }));
}
