//! Operations after a failed connection setup.

use jobsearch_query::{ConnectionInitError, JobsSearch, QueryError, SearchCriteria};

fn failed() -> JobsSearch {
    JobsSearch::from_init(Err(ConnectionInitError::config(
        "either service_name or endpoint must be set",
    )))
}

#[tokio::test]
async fn test_every_operation_short_circuits() {
    let search = failed();

    let err = search.search(&SearchCriteria::new("analyst")).await.unwrap_err();
    assert!(matches!(err, QueryError::Unavailable { .. }));

    let err = search.search_zip("10001").await.unwrap_err();
    assert!(matches!(err, QueryError::Unavailable { .. }));

    let err = search.suggest("ana", true).await.unwrap_err();
    assert!(matches!(err, QueryError::Unavailable { .. }));

    let err = search.look_up("87990").await.unwrap_err();
    assert!(matches!(err, QueryError::Unavailable { .. }));
}

#[tokio::test]
async fn test_failure_is_sticky() {
    let search = failed();
    for _ in 0..3 {
        let err = search.suggest("a", false).await.unwrap_err();
        assert!(err.to_string().contains("service_name or endpoint"));
    }
    assert!(search.init_error().is_some());
    assert!(!search.state().is_ready());
}

#[tokio::test]
async fn test_unavailable_even_for_invalid_input() {
    let search = failed();
    let criteria = SearchCriteria::new("x").with_salary_range("abc");
    let err = search.search(&criteria).await.unwrap_err();
    assert!(err.is_service_failure());
}
