use jobsearch_query::{JobsSearch, SearchCriteria, SortMode};

use crate::common::StubServer;

#[tokio::test]
async fn test_search_sends_built_request() {
    let server = StubServer::start().await;
    let search = JobsSearch::from_init(jobsearch_azure::connect(&server.config()));

    let criteria = SearchCriteria::new("analyst")
        .with_posting_type("External")
        .with_sort(SortMode::MostRecent)
        .with_max_distance(5, "40.7", "-74.0")
        .with_page(2);
    search.search(&criteria).await.unwrap();

    let bodies = server.bodies();
    assert_eq!(bodies.len(), 1);
    let (tag, body) = &bodies[0];
    assert_eq!(tag, "nycjobs/search");
    assert_eq!(body["search"], "analyst");
    assert_eq!(body["searchMode"], "any");
    assert_eq!(body["skip"], 1);
    assert_eq!(body["top"], 10);
    assert_eq!(body["count"], true);
    assert_eq!(body["orderby"], "posting_date desc");
    assert_eq!(
        body["filter"],
        "posting_type eq 'External' and geo.distance(geo_location, geography'POINT(-74 40.7)') le 5"
    );
    assert_eq!(server.queries(), vec!["api-version=2020-06-30"]);
}

#[tokio::test]
async fn test_search_decodes_page() {
    let server = StubServer::start().await;
    let search = JobsSearch::from_init(jobsearch_azure::connect(&server.config()));

    let page = search.search(&SearchCriteria::new("analyst")).await.unwrap();

    assert_eq!(page.total_count, 42);
    assert_eq!(page.documents.len(), 2);
    let first = &page.documents[0];
    assert_eq!(first.id, "87990");
    assert_eq!(first.salary_range_from, Some(55000.0));
    assert!(first.tags.is_empty());
    let location = first.geo_location.unwrap();
    assert_eq!(location.latitude(), 40.7);
    assert_eq!(page.highlights["87990"], vec!["senior <b>analyst</b>"]);
    assert_eq!(page.facets["business_title"][0].count, 3);
}

#[tokio::test]
async fn test_search_without_matches_is_empty_page() {
    let server = StubServer::start().await;
    let search = JobsSearch::from_init(jobsearch_azure::connect(&server.config()));

    let page = search.search(&SearchCriteria::new("nothing")).await.unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total_count, 0);
}
