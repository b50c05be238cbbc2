//! The job search facade.
//!
//! [`JobsSearch`] owns the outcome of connection setup and runs the four
//! query operations against it:
//!
//! | Operation | Index | Request builder |
//! |-----------|-------|-----------------|
//! | [`search`](JobsSearch::search) | jobs | [`QueryBuilder`] |
//! | [`search_zip`](JobsSearch::search_zip) | zip codes | [`ZipResolver`] |
//! | [`suggest`](JobsSearch::suggest) | jobs | [`SuggestBuilder`] |
//! | [`look_up`](JobsSearch::look_up) | jobs | [`DocumentFetcher`] |
//!
//! If connection setup failed, the failure is kept and every operation
//! returns [`QueryError::Unavailable`] without contacting the index.
//!
//! Index failures are logged and returned as
//! [`QueryError::TransportFailure`]; they are never retried. An empty page
//! is a successful answer, distinct from a failure.

use std::fmt;

use jobsearch_core::{ConnectionInitError, QueryError, Result};

use crate::backend::{IndexConnection, IndexService};
use crate::builder::QueryBuilder;
use crate::criteria::SearchCriteria;
use crate::document::{JobDocument, ZipCodeDocument};
use crate::lookup::DocumentFetcher;
use crate::response::{ResultPage, Suggestion, decode_document};
use crate::suggest::SuggestBuilder;
use crate::zip::ZipResolver;

/// Outcome of connection setup.
#[derive(Clone, Debug)]
pub enum ConnectionState {
    /// Connected; queries go to the index.
    Ready(IndexConnection),
    /// Setup failed; queries short-circuit.
    Failed(String),
}

impl ConnectionState {
    /// Returns `true` if queries can be served.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(_) => write!(f, "ready"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Entry point for all job search queries.
///
/// Construct once at startup and share by reference (or behind an `Arc`);
/// it holds no per-call state.
#[derive(Clone, Debug)]
pub struct JobsSearch {
    state: ConnectionState,
    builder: QueryBuilder,
}

impl JobsSearch {
    /// Create a facade over an established connection.
    pub fn new(connection: IndexConnection) -> Self {
        Self {
            state: ConnectionState::Ready(connection),
            builder: QueryBuilder::new(),
        }
    }

    /// Create a facade from the result of connection setup.
    ///
    /// A setup error is logged once and kept; it does not abort the caller.
    pub fn from_init(init: std::result::Result<IndexConnection, ConnectionInitError>) -> Self {
        match init {
            Ok(connection) => Self::new(connection),
            Err(e) => {
                log::error!("Failed to initialize index connection: {e}");
                Self {
                    state: ConnectionState::Failed(e.to_string()),
                    builder: QueryBuilder::new(),
                }
            }
        }
    }

    /// The connection state.
    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// The setup error message, if setup failed.
    pub fn init_error(&self) -> Option<&str> {
        match &self.state {
            ConnectionState::Failed(reason) => Some(reason),
            ConnectionState::Ready(_) => None,
        }
    }

    /// Run the primary job search.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<ResultPage<JobDocument>> {
        let index = self.connection()?.jobs();
        let request = self.builder.build(criteria)?;
        let response = diagnose(index, "search", index.search(&request).await)?;
        diagnose(index, "search", ResultPage::from_response(response))
    }

    /// Resolve a zip code against the zip-code index.
    pub async fn search_zip(&self, zip_code: &str) -> Result<ResultPage<ZipCodeDocument>> {
        let index = self.connection()?.zip_codes();
        let request = ZipResolver::build(zip_code);
        let response = diagnose(index, "zip search", index.search(&request).await)?;
        diagnose(index, "zip search", ResultPage::from_response(response))
    }

    /// Autocomplete partial `text`.
    pub async fn suggest(&self, text: &str, fuzzy: bool) -> Result<Vec<Suggestion>> {
        let index = self.connection()?.jobs();
        let request = SuggestBuilder::build(text, fuzzy);
        let response = diagnose(index, "suggest", index.suggest(&request).await)?;
        Ok(response.suggestions)
    }

    /// Fetch a job posting by id.
    ///
    /// `Ok(None)` means the index has no such document; an index failure is
    /// an `Err`.
    pub async fn look_up(&self, id: &str) -> Result<Option<JobDocument>> {
        let index = self.connection()?.jobs();
        let key = DocumentFetcher::key(id)?;
        let raw = diagnose(index, "lookup", index.get_by_key(key).await)?;
        match raw {
            Some(document) => diagnose(index, "lookup", decode_document(document)).map(Some),
            None => {
                log::debug!("Document '{key}' not found in index '{}'", index.name());
                Ok(None)
            }
        }
    }

    fn connection(&self) -> Result<&IndexConnection> {
        match &self.state {
            ConnectionState::Ready(connection) => Ok(connection),
            ConnectionState::Failed(reason) => Err(QueryError::unavailable(reason.clone())),
        }
    }
}

/// Log transport failures; pass everything through unchanged.
fn diagnose<T>(index: &dyn IndexService, operation: &str, result: Result<T>) -> Result<T> {
    if let Err(e @ QueryError::TransportFailure { .. }) = &result {
        log::warn!("Error querying index '{}' ({operation}): {e}", index.name());
    }
    result
}

// ============================================================================
// Tests
// ============================================================================
