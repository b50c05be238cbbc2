//! Index service trait and the shared connection handle.
//!
//! This module defines the `IndexService` trait that every index adapter
//! must satisfy, plus [`IndexConnection`], the pair of handles (job index and
//! zip-code index) that the query operations share.
//!
//! # Adapters
//!
//! - `AzureSearchIndex` (in `jobsearch-azure`): Azure Cognitive Search REST API
//! - `MockIndexService` (`mock` feature): canned responses for tests

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use jobsearch_core::Result;

use crate::request::{SearchRequest, SuggestRequest};
use crate::response::{RawDocument, SearchResponse, SuggestResponse};

/// Abstract index service.
///
/// Implementations only transport requests; they never rank, tokenize, or
/// store documents. Any failure is reported as
/// [`QueryError::TransportFailure`](jobsearch_core::QueryError::TransportFailure).
///
/// # Async
///
/// All calls are async to support network-bound adapters without blocking.
#[async_trait]
pub trait IndexService: Send + Sync {
    /// Execute a full-text search.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;

    /// Fetch autocomplete suggestions.
    async fn suggest(&self, request: &SuggestRequest) -> Result<SuggestResponse>;

    /// Fetch a document by key. `Ok(None)` means the key does not exist.
    async fn get_by_key(&self, key: &str) -> Result<Option<RawDocument>>;

    /// Index name for diagnostics.
    fn name(&self) -> &str;
}

/// Shared handles to the job and zip-code indexes.
///
/// Cheap to clone (Arc internals) and never mutated after construction.
#[derive(Clone)]
pub struct IndexConnection {
    jobs: Arc<dyn IndexService>,
    zip_codes: Arc<dyn IndexService>,
}

impl IndexConnection {
    /// Create a connection from the two index handles.
    pub fn new(jobs: Arc<dyn IndexService>, zip_codes: Arc<dyn IndexService>) -> Self {
        Self { jobs, zip_codes }
    }

    /// The job posting index.
    pub fn jobs(&self) -> &dyn IndexService {
        self.jobs.as_ref()
    }

    /// The zip-code index.
    pub fn zip_codes(&self) -> &dyn IndexService {
        self.zip_codes.as_ref()
    }
}

impl fmt::Debug for IndexConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexConnection")
            .field("jobs", &self.jobs.name())
            .field("zip_codes", &self.zip_codes.name())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
