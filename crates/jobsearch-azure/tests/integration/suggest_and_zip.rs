use jobsearch_query::JobsSearch;
use serde_json::json;

use crate::common::StubServer;

#[tokio::test]
async fn test_suggest_round_trip() {
    let server = StubServer::start().await;
    let search = JobsSearch::from_init(jobsearch_azure::connect(&server.config()));

    let suggestions = search.suggest("acc", true).await.unwrap();
    let texts: Vec<_> = suggestions.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Accountant", "Accounting Manager"]);
    assert_eq!(suggestions[0].document["id"], "1");

    let (tag, body) = &server.bodies()[0];
    assert_eq!(tag, "nycjobs/suggest");
    assert_eq!(
        body,
        &json!({"search": "acc", "suggesterName": "sg", "fuzzy": true, "top": 8})
    );
}

#[tokio::test]
async fn test_search_zip_uses_zip_index() {
    let server = StubServer::start().await;
    let search = JobsSearch::from_init(jobsearch_azure::connect(&server.config()));

    let page = search.search_zip(" 10001 ").await.unwrap();
    assert_eq!(page.documents.len(), 1);
    let zip = &page.documents[0];
    assert_eq!(zip.city.as_deref(), Some("New York"));
    assert_eq!(zip.coordinates(), Some((40.7506, -73.9972)));

    let (tag, body) = &server.bodies()[0];
    assert_eq!(tag, "zipcodes/search");
    assert_eq!(body["search"], "10001");
    assert_eq!(body["searchMode"], "all");
    assert_eq!(body["top"], 1);
}
