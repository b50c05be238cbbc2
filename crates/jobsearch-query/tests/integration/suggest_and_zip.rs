//! Suggestions and zip-code resolution through the facade.

use jobsearch_query::mock::MockIndexService;
use jobsearch_query::{RawDocument, SearchMode, Suggestion};
use serde_json::json;

use crate::common::{TestHarness, raw, response_with};

#[tokio::test]
async fn test_suggest_passes_fuzzy_flag() {
    let suggestions = vec![Suggestion {
        text: "Accountant".to_string(),
        document: RawDocument::new(),
    }];
    let harness =
        TestHarness::with_jobs(MockIndexService::new("nycjobs").with_suggestions(suggestions));

    let results = harness.search.suggest("acc", true).await.unwrap();
    assert_eq!(results[0].text, "Accountant");
    harness.search.suggest("acc", false).await.unwrap();

    let requests = harness.jobs.suggest_requests().await;
    assert!(requests[0].fuzzy);
    assert!(!requests[1].fuzzy);
    assert!(requests.iter().all(|r| r.top == 8 && r.suggester == "sg"));
}

#[tokio::test]
async fn test_search_zip_uses_zip_index() {
    let zip_codes = MockIndexService::new("zipcodes").with_search_response(response_with(
        vec![raw(json!({
            "zipcode": "10001",
            "city": "New York",
            "state": "NY",
            "latitude": 40.7506,
            "longitude": -73.9972
        }))],
        1,
    ));
    let harness = TestHarness::with_indexes(MockIndexService::new("nycjobs"), zip_codes);

    let page = harness.search.search_zip("10001").await.unwrap();
    assert_eq!(page.documents[0].coordinates(), Some((40.7506, -73.9972)));

    let requests = harness.zip_codes.search_requests().await;
    assert_eq!(requests[0].search_mode, SearchMode::All);
    assert_eq!(requests[0].top, 1);
    assert_eq!(harness.jobs.call_count(), 0);
}
