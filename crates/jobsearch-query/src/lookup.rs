//! Document-by-key requests.

use jobsearch_core::{QueryError, Result};

/// Validates keys for direct document retrieval.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentFetcher;

impl DocumentFetcher {
    /// Normalize `id` into a document key.
    ///
    /// # Errors
    ///
    /// An empty key cannot address a document and is rejected as invalid
    /// input rather than sent to the index.
    pub fn key(id: &str) -> Result<&str> {
        let key = id.trim();
        if key.is_empty() {
            return Err(QueryError::invalid_input("id", "document key must not be empty"));
        }
        Ok(key)
    }
}
