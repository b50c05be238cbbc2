//! Responses from an [`IndexService`](crate::IndexService) and the typed
//! pages built from them.
//!
//! Index services hand back documents as untyped field maps
//! ([`RawDocument`]); [`ResultPage::from_response`] projects them onto a
//! concrete document type.

use std::collections::BTreeMap;

use jobsearch_core::{QueryError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema;

/// A document as returned by the index: field name to JSON value.
pub type RawDocument = serde_json::Map<String, Value>;

/// One count in a facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetBucket {
    /// Distinct value, or bucket start for interval facets
    pub value: Value,
    /// Number of matching documents
    pub count: u64,
}

/// Facet counts keyed by field name.
pub type FacetCounts = BTreeMap<String, Vec<FacetBucket>>;

/// A single search hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Selected fields
    pub document: RawDocument,
    /// Relevance score, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Highlight fragments keyed by field name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub highlights: BTreeMap<String, Vec<String>>,
}

/// What an index returns for a [`SearchRequest`](crate::SearchRequest).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Hits in ranking order
    pub hits: Vec<SearchHit>,
    /// Total matches, when requested
    pub total_count: Option<u64>,
    /// Facet counts, when requested
    #[serde(default)]
    pub facets: FacetCounts,
}

/// A suggestion as returned by the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Suggested text
    pub text: String,
    /// Additional fields of the source document
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub document: RawDocument,
}

/// What an index returns for a [`SuggestRequest`](crate::SuggestRequest).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// Suggestions in ranking order
    pub suggestions: Vec<Suggestion>,
}

/// One page of typed search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage<D> {
    /// Documents on this page
    pub documents: Vec<D>,
    /// Total matches across all pages
    pub total_count: u64,
    /// Facet counts
    pub facets: FacetCounts,
    /// Highlight fragments keyed by document id
    pub highlights: BTreeMap<String, Vec<String>>,
}

impl<D> ResultPage<D> {
    /// A page with no documents.
    pub fn empty() -> Self {
        Self {
            documents: Vec::new(),
            total_count: 0,
            facets: FacetCounts::new(),
            highlights: BTreeMap::new(),
        }
    }

    /// Returns `true` if the page holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<D: DeserializeOwned> ResultPage<D> {
    /// Project a raw response onto `D`.
    ///
    /// Highlight fragments of all fields are merged per document and keyed by
    /// the document's `id`. When the index omits the total count, the number
    /// of returned documents is used. A document that does not fit `D` is a
    /// transport failure: the index answered with something unexpected.
    pub fn from_response(response: SearchResponse) -> Result<Self> {
        let total_count = response
            .total_count
            .unwrap_or(response.hits.len() as u64);
        let mut documents = Vec::with_capacity(response.hits.len());
        let mut highlights = BTreeMap::new();

        for hit in response.hits {
            let fragments: Vec<String> = hit.highlights.into_values().flatten().collect();
            if !fragments.is_empty()
                && let Some(id) = document_key(&hit.document)
            {
                highlights.insert(id, fragments);
            }
            documents.push(decode_document(hit.document)?);
        }

        Ok(Self {
            documents,
            total_count,
            facets: response.facets,
            highlights,
        })
    }
}

/// Decode one raw document into `D`.
pub fn decode_document<D: DeserializeOwned>(document: RawDocument) -> Result<D> {
    serde_json::from_value(Value::Object(document))
        .map_err(|e| QueryError::transport_with_source("malformed document in response", e))
}

fn document_key(document: &RawDocument) -> Option<String> {
    match document.get(schema::ID)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
