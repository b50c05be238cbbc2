//! Azure Cognitive Search adapter for the job search query layer.
//!
//! [`connect`] turns an [`IndexServiceConfig`] into an [`IndexConnection`]
//! whose job and zip-code indexes talk to the service's REST API:
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | search | `POST` | `/indexes/{index}/docs/search` |
//! | suggest | `POST` | `/indexes/{index}/docs/suggest` |
//! | lookup | `GET` | `/indexes/{index}/docs/{key}` |
//!
//! Every call carries the `api-key` header and the configured `api-version`.
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use jobsearch_core::IndexServiceConfig;
//! use jobsearch_query::{JobsSearch, SearchCriteria};
//!
//! let config = IndexServiceConfig::load(None)?;
//! let search = JobsSearch::from_init(jobsearch_azure::connect(&config));
//! let page = search.search(&SearchCriteria::new("analyst")).await?;
//! println!("{} matches", page.total_count);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod wire;

use std::sync::Arc;

use jobsearch_core::{ConnectionInitError, IndexServiceConfig};
use jobsearch_query::IndexConnection;
use reqwest::{Client, Url};

pub use client::AzureSearchIndex;

/// Establish handles to the job and zip-code indexes.
///
/// No request is made; this validates the configuration and builds the
/// shared HTTP client.
pub fn connect(config: &IndexServiceConfig) -> Result<IndexConnection, ConnectionInitError> {
    config.validate()?;

    let endpoint = config.endpoint_url();
    let base = Url::parse(&endpoint).map_err(|e| {
        ConnectionInitError::client_with_source(format!("invalid endpoint '{endpoint}'"), e)
    })?;
    if base.cannot_be_a_base() {
        return Err(ConnectionInitError::config(format!(
            "endpoint '{endpoint}' is not a base URL"
        )));
    }

    let http = Client::builder()
        .timeout(config.timeout())
        .build()
        .map_err(|e| ConnectionInitError::client_with_source("failed to build HTTP client", e))?;

    let index = |name: &str| {
        Arc::new(AzureSearchIndex::new(
            http.clone(),
            base.clone(),
            name,
            config.api_key.clone(),
            config.api_version.clone(),
        ))
    };
    let jobs = index(&config.jobs_index);
    let zip_codes = index(&config.zip_index);

    log::info!(
        "Using search service {} (indexes '{}', '{}')",
        base,
        config.jobs_index,
        config.zip_index
    );
    Ok(IndexConnection::new(jobs, zip_codes))
}

// ============================================================================
// Tests
// ============================================================================
