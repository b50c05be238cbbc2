//! Autocomplete requests.

use crate::request::SuggestRequest;
use crate::schema;

/// Maximum suggestions returned per request.
pub const SUGGESTION_LIMIT: usize = 8;

/// Builder for suggester requests against the job index.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestBuilder;

impl SuggestBuilder {
    /// Build the request for the partial `text`, optionally fuzzy.
    pub fn build(text: &str, fuzzy: bool) -> SuggestRequest {
        SuggestRequest {
            search_text: text.to_string(),
            suggester: schema::SUGGESTER.to_string(),
            fuzzy,
            top: SUGGESTION_LIMIT,
        }
    }
}
