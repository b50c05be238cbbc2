//! Azure Cognitive Search REST payloads.
//!
//! Request bodies are built from the transport-neutral request types in
//! `jobsearch-query`; this is the only place filters, facets, scoring
//! parameters and orderings are rendered to strings.

use std::collections::BTreeMap;

use jobsearch_query::{
    FacetBucket, QueryError, RawDocument, Result, SearchHit, SearchRequest, SearchResponse,
    SuggestRequest, SuggestResponse, Suggestion,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const SCORE_KEY: &str = "@search.score";
const HIGHLIGHTS_KEY: &str = "@search.highlights";
const SUGGESTION_TEXT_KEY: &str = "@search.text";

/// Body of `POST /indexes/{index}/docs/search`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody<'a> {
    search: &'a str,
    search_mode: &'static str,
    top: usize,
    skip: usize,
    count: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight_pre_tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight_post_tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    facets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scoring_profile: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    scoring_parameters: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    orderby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    select: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
}

impl<'a> From<&'a SearchRequest> for SearchBody<'a> {
    fn from(request: &'a SearchRequest) -> Self {
        let highlight = request.highlight.as_ref();
        let scoring = request.scoring.as_ref();
        Self {
            search: &request.search_text,
            search_mode: request.search_mode.as_str(),
            top: request.top,
            skip: request.skip,
            count: request.include_total_count,
            highlight: highlight.map(|h| h.fields.join(",")),
            highlight_pre_tag: highlight.map(|h| h.pre_tag.as_str()),
            highlight_post_tag: highlight.map(|h| h.post_tag.as_str()),
            facets: request.facets.iter().map(ToString::to_string).collect(),
            scoring_profile: scoring.map(|s| s.profile.as_str()),
            scoring_parameters: scoring
                .map(|s| s.parameters.iter().map(ToString::to_string).collect())
                .unwrap_or_default(),
            orderby: join_non_empty(request.order_by.iter().map(ToString::to_string)),
            select: join_non_empty(request.select.iter().cloned()),
            filter: request.filter.as_ref().map(ToString::to_string),
        }
    }
}

fn join_non_empty<I: Iterator<Item = String>>(items: I) -> Option<String> {
    let items: Vec<String> = items.collect();
    if items.is_empty() {
        None
    } else {
        Some(items.join(","))
    }
}

/// Body of `POST /indexes/{index}/docs/suggest`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestBody<'a> {
    search: &'a str,
    suggester_name: &'a str,
    fuzzy: bool,
    top: usize,
}

impl<'a> From<&'a SuggestRequest> for SuggestBody<'a> {
    fn from(request: &'a SuggestRequest) -> Self {
        Self {
            search: &request.search_text,
            suggester_name: &request.suggester,
            fuzzy: request.fuzzy,
            top: request.top,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FacetEntry {
    #[serde(default)]
    value: Value,
    count: u64,
}

/// Response of a search call.
#[derive(Debug, Deserialize)]
pub struct SearchResponseBody {
    #[serde(rename = "@odata.count", default)]
    count: Option<u64>,
    #[serde(rename = "@search.facets", default)]
    facets: BTreeMap<String, Vec<FacetEntry>>,
    value: Vec<RawDocument>,
}

impl TryFrom<SearchResponseBody> for SearchResponse {
    type Error = QueryError;

    fn try_from(body: SearchResponseBody) -> Result<Self> {
        let hits = body
            .value
            .into_iter()
            .map(into_hit)
            .collect::<Result<Vec<_>>>()?;
        let facets = body
            .facets
            .into_iter()
            .map(|(field, entries)| {
                let buckets = entries
                    .into_iter()
                    .map(|e| FacetBucket {
                        value: e.value,
                        count: e.count,
                    })
                    .collect();
                (field, buckets)
            })
            .collect();
        Ok(SearchResponse {
            hits,
            total_count: body.count,
            facets,
        })
    }
}

/// Split search annotations out of a returned document.
fn into_hit(mut document: RawDocument) -> Result<SearchHit> {
    let score = match document.remove(SCORE_KEY) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_f64().ok_or_else(|| {
            QueryError::transport(format!("non-numeric {SCORE_KEY} in search response: {value}"))
        })?),
    };
    let highlights = match document.remove(HIGHLIGHTS_KEY) {
        None | Some(Value::Null) => BTreeMap::new(),
        Some(value) => serde_json::from_value(value).map_err(|e| {
            QueryError::transport_with_source(
                format!("malformed {HIGHLIGHTS_KEY} in search response"),
                e,
            )
        })?,
    };
    Ok(SearchHit {
        document,
        score,
        highlights,
    })
}

/// Response of a suggest call.
#[derive(Debug, Deserialize)]
pub struct SuggestResponseBody {
    value: Vec<RawDocument>,
}

impl TryFrom<SuggestResponseBody> for SuggestResponse {
    type Error = QueryError;

    fn try_from(body: SuggestResponseBody) -> Result<Self> {
        let suggestions = body
            .value
            .into_iter()
            .map(|mut document| match document.remove(SUGGESTION_TEXT_KEY) {
                Some(Value::String(text)) => Ok(Suggestion { text, document }),
                Some(other) => Err(QueryError::transport(format!(
                    "non-string {SUGGESTION_TEXT_KEY} in suggest response: {other}"
                ))),
                None => Err(QueryError::transport(format!(
                    "suggestion without {SUGGESTION_TEXT_KEY} in suggest response"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(SuggestResponse { suggestions })
    }
}

/// Whether a response body is an Azure error envelope (`{"error": {...}}`).
///
/// A lookup 404 with this body means the index itself is missing; a 404
/// without it means the key is.
pub fn is_error_payload(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .map(|value| value.get("error").is_some_and(Value::is_object))
        .unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================
