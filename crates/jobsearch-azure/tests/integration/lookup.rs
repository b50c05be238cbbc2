use jobsearch_query::{JobsSearch, QueryError};

use crate::common::StubServer;

#[tokio::test]
async fn test_look_up_found() {
    let server = StubServer::start().await;
    let search = JobsSearch::from_init(jobsearch_azure::connect(&server.config()));

    let job = search.look_up("87990").await.unwrap().expect("document");
    assert_eq!(job.business_title.as_deref(), Some("Data Analyst"));
    assert_eq!(server.lookups(), vec!["nycjobs/87990"]);
    assert_eq!(server.queries(), vec!["api-version=2020-06-30"]);
}

#[tokio::test]
async fn test_look_up_missing_is_none() {
    let server = StubServer::start().await;
    let search = JobsSearch::from_init(jobsearch_azure::connect(&server.config()));

    assert!(search.look_up("00000").await.unwrap().is_none());
}

#[tokio::test]
async fn test_look_up_undecodable_body_is_transport_failure() {
    let server = StubServer::start().await;
    let search = JobsSearch::from_init(jobsearch_azure::connect(&server.config()));

    let err = search.look_up("garbled").await.unwrap_err();
    assert!(matches!(err, QueryError::TransportFailure { .. }));
}
