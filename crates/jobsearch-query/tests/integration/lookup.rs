//! Document retrieval: found, not found, and index failure.

use jobsearch_query::mock::MockIndexService;
use jobsearch_query::QueryError;

use crate::common::{TestHarness, job};

#[tokio::test]
async fn test_look_up_found() {
    let harness = TestHarness::with_jobs(
        MockIndexService::new("nycjobs").with_document("87990", job("87990", "Account Manager")),
    );

    let document = harness
        .search
        .look_up("87990")
        .await
        .expect("lookup should succeed")
        .expect("document should exist");

    assert_eq!(document.id, "87990");
    assert_eq!(document.business_title.as_deref(), Some("Account Manager"));
    assert_eq!(harness.jobs.lookups().await, vec!["87990"]);
}

#[tokio::test]
async fn test_look_up_not_found_is_distinct_from_failure() {
    let harness = TestHarness::new();
    let missing = harness.search.look_up("nonexistent-id").await;
    assert!(matches!(missing, Ok(None)));

    let broken = TestHarness::with_jobs(MockIndexService::new("nycjobs").failing("503"));
    let failed = broken.search.look_up("nonexistent-id").await;
    assert!(matches!(failed, Err(QueryError::TransportFailure { .. })));
}

#[tokio::test]
async fn test_look_up_empty_id_is_invalid() {
    let harness = TestHarness::new();
    let err = harness.search.look_up("").await.unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(harness.jobs.call_count(), 0);
}
