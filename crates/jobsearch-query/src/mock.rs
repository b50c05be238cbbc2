//! In-memory index service for tests.
//!
//! [`MockIndexService`] answers with canned responses and records every
//! request it receives, so tests can assert on exactly what the query layer
//! asked for.
//!
//! ```rust
//! # tokio_test::block_on(async {
//! use jobsearch_query::{IndexService, SearchRequest};
//! use jobsearch_query::mock::MockIndexService;
//!
//! let index = MockIndexService::new("nycjobs");
//! let response = index.search(&SearchRequest::new("*")).await.unwrap();
//! assert!(response.hits.is_empty());
//! assert_eq!(index.search_requests().await.len(), 1);
//! # });
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jobsearch_core::{QueryError, Result};
use tokio::sync::Mutex;

use crate::backend::IndexService;
use crate::request::{SearchRequest, SuggestRequest};
use crate::response::{RawDocument, SearchResponse, SuggestResponse, Suggestion};

/// Index service returning canned data.
#[derive(Debug, Default)]
pub struct MockIndexService {
    name: String,
    search_response: SearchResponse,
    suggestions: Vec<Suggestion>,
    documents: HashMap<String, RawDocument>,
    failure: Option<String>,
    calls: AtomicUsize,
    search_requests: Mutex<Vec<SearchRequest>>,
    suggest_requests: Mutex<Vec<SuggestRequest>>,
    lookups: Mutex<Vec<String>>,
}

impl MockIndexService {
    /// Create an empty mock index.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Answer every search with `response`.
    pub fn with_search_response(mut self, response: SearchResponse) -> Self {
        self.search_response = response;
        self
    }

    /// Answer every suggest call with `suggestions`.
    pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Make `document` retrievable under `key`.
    pub fn with_document(mut self, key: impl Into<String>, document: RawDocument) -> Self {
        self.documents.insert(key.into(), document);
        self
    }

    /// Fail every call with a transport failure.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Total number of calls received.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Search requests received so far.
    pub async fn search_requests(&self) -> Vec<SearchRequest> {
        self.search_requests.lock().await.clone()
    }

    /// Suggest requests received so far.
    pub async fn suggest_requests(&self) -> Vec<SuggestRequest> {
        self.suggest_requests.lock().await.clone()
    }

    /// Keys looked up so far.
    pub async fn lookups(&self) -> Vec<String> {
        self.lookups.lock().await.clone()
    }

    fn record_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(QueryError::transport(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IndexService for MockIndexService {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.search_requests.lock().await.push(request.clone());
        self.record_call()?;
        Ok(self.search_response.clone())
    }

    async fn suggest(&self, request: &SuggestRequest) -> Result<SuggestResponse> {
        self.suggest_requests.lock().await.push(request.clone());
        self.record_call()?;
        Ok(SuggestResponse {
            suggestions: self.suggestions.iter().take(request.top).cloned().collect(),
        })
    }

    async fn get_by_key(&self, key: &str) -> Result<Option<RawDocument>> {
        self.lookups.lock().await.push(key.to_string());
        self.record_call()?;
        Ok(self.documents.get(key).cloned())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Tests
// ============================================================================
