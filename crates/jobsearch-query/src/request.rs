//! Request shapes handed to an [`IndexService`](crate::IndexService).
//!
//! These types describe *what* to ask the index for. Adapters translate them
//! into their own wire format; none of them know about HTTP.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::FilterExpression;

/// How free-text terms combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Any term may match (OR).
    #[default]
    Any,
    /// All terms must match (AND).
    All,
}

impl SearchMode {
    /// Lowercase name, as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Any => "any",
            SearchMode::All => "all",
        }
    }
}

/// Sort direction of an [`OrderBy`] clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// An explicit ordering clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    /// Sortable field
    pub field: String,
    /// Direction
    pub direction: SortDirection,
}

impl OrderBy {
    /// Ascending order on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending order on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{} asc", self.field),
            SortDirection::Descending => write!(f, "{} desc", self.field),
        }
    }
}

/// A facet to compute alongside results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSpec {
    /// Facetable field
    pub field: String,
    /// Bucket width for numeric facets; `None` counts distinct values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u64>,
}

impl FacetSpec {
    /// Count distinct values of `field`.
    pub fn values(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            interval: None,
        }
    }

    /// Count values of `field` in buckets of `width`.
    pub fn interval(field: impl Into<String>, width: u64) -> Self {
        Self {
            field: field.into(),
            interval: Some(width),
        }
    }
}

/// Renders in the index's facet expression syntax, e.g.
/// `salary_range_from,interval:50000`.
impl fmt::Display for FacetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.interval {
            Some(width) => write!(f, "{},interval:{width}", self.field),
            None => f.write_str(&self.field),
        }
    }
}

/// Hit highlighting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Fields to return highlight fragments for
    pub fields: Vec<String>,
    /// Marker inserted before a matched span
    pub pre_tag: String,
    /// Marker inserted after a matched span
    pub post_tag: String,
}

/// A named parameter passed to a scoring profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringParameter {
    /// Parameter name, as declared in the profile
    pub name: String,
    /// Parameter values
    pub values: Vec<String>,
}

impl ScoringParameter {
    /// Create a parameter with the given values.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Renders as `name-value1,value2`.
impl fmt::Display for ScoringParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.values.join(","))
    }
}

/// Scoring profile selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoring {
    /// Profile name
    pub profile: String,
    /// Parameters for the profile
    pub parameters: Vec<ScoringParameter>,
}

/// A full-text search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Query text; `*` matches every document.
    pub search_text: String,
    /// How terms combine
    pub search_mode: SearchMode,
    /// Page size
    pub top: usize,
    /// Number of records to skip
    pub skip: usize,
    /// Ask the index for the total number of matches
    pub include_total_count: bool,
    /// Highlighting, if requested
    pub highlight: Option<Highlight>,
    /// Facets to compute
    pub facets: Vec<FacetSpec>,
    /// Scoring profile, if any
    pub scoring: Option<Scoring>,
    /// Explicit ordering clauses
    pub order_by: Vec<OrderBy>,
    /// Fields to return; empty means all retrievable fields
    pub select: Vec<String>,
    /// Filter; `None` means unfiltered
    pub filter: Option<FilterExpression>,
}

impl SearchRequest {
    /// A bare request: default mode, no options, 10 results.
    pub fn new(search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            search_mode: SearchMode::default(),
            top: 10,
            skip: 0,
            include_total_count: false,
            highlight: None,
            facets: Vec::new(),
            scoring: None,
            order_by: Vec::new(),
            select: Vec::new(),
            filter: None,
        }
    }
}

/// An autocomplete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestRequest {
    /// Partial text typed so far
    pub search_text: String,
    /// Suggester defined on the index
    pub suggester: String,
    /// Tolerate typos
    pub fuzzy: bool,
    /// Maximum suggestions
    pub top: usize,
}

// ============================================================================
// Tests
// ============================================================================
