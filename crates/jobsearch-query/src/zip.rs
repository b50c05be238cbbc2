//! Zip-code resolution requests.

use crate::request::{SearchMode, SearchRequest};

/// Builder for zip-code lookups against the zip-code index.
///
/// Every term must match and only the best hit is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipResolver;

impl ZipResolver {
    /// Build the request for `zip_code`.
    pub fn build(zip_code: &str) -> SearchRequest {
        let mut request = SearchRequest::new(zip_code.trim());
        request.search_mode = SearchMode::All;
        request.top = 1;
        request
    }
}
