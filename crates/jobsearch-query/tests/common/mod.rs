//! Common test utilities for jobsearch-query integration tests.

use std::sync::Arc;

use jobsearch_query::mock::MockIndexService;
use jobsearch_query::{IndexConnection, JobsSearch, RawDocument, SearchHit, SearchResponse};
use serde_json::{Value, json};

/// Test harness wiring mock indexes into a [`JobsSearch`].
pub struct TestHarness {
    /// Mock job index
    pub jobs: Arc<MockIndexService>,
    /// Mock zip-code index
    pub zip_codes: Arc<MockIndexService>,
    /// Facade under test
    pub search: JobsSearch,
}

impl TestHarness {
    /// Harness over empty indexes.
    pub fn new() -> Self {
        Self::with_indexes(
            MockIndexService::new("nycjobs"),
            MockIndexService::new("zipcodes"),
        )
    }

    /// Harness over custom indexes.
    pub fn with_indexes(jobs: MockIndexService, zip_codes: MockIndexService) -> Self {
        let jobs = Arc::new(jobs);
        let zip_codes = Arc::new(zip_codes);
        let search = JobsSearch::new(IndexConnection::new(jobs.clone(), zip_codes.clone()));
        Self {
            jobs,
            zip_codes,
            search,
        }
    }

    /// Harness whose job index is `jobs`.
    pub fn with_jobs(jobs: MockIndexService) -> Self {
        Self::with_indexes(jobs, MockIndexService::new("zipcodes"))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a JSON object literal into a raw document.
pub fn raw(value: Value) -> RawDocument {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// A job posting as the index would return it.
pub fn job(id: &str, title: &str) -> RawDocument {
    raw(json!({
        "id": id,
        "agency": "DEPT OF ENVIRONMENT PROTECTION",
        "posting_type": "External",
        "num_of_positions": 2,
        "business_title": title,
        "salary_range_from": 55000.0,
        "salary_range_to": 72000.0,
        "salary_frequency": "Annual",
        "work_location": "59-17 Junction Blvd Corona Ny",
        "job_description": "Analyze water quality data.",
        "posting_date": "2014-01-15T00:00:00Z",
        "geo_location": {"type": "Point", "coordinates": [-73.8648, 40.7357]},
        "tags": []
    }))
}

/// A search response holding `documents`.
pub fn response_with(documents: Vec<RawDocument>, total: u64) -> SearchResponse {
    SearchResponse {
        hits: documents
            .into_iter()
            .map(|document| SearchHit {
                document,
                ..Default::default()
            })
            .collect(),
        total_count: Some(total),
        ..Default::default()
    }
}
