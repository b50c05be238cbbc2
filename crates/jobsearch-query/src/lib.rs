//! Query construction for job search.
//!
//! This crate turns loosely typed search form input into structured requests
//! against a remote full-text/geo index, and runs them through an
//! [`IndexService`] adapter. It never ranks, tokenizes, or stores documents.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     jobsearch-query                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  JobsSearch (facade, connection state)                      │
//! │  ├── QueryBuilder    → SearchRequest  (jobs index)          │
//! │  ├── ZipResolver     → SearchRequest  (zip-code index)      │
//! │  ├── SuggestBuilder  → SuggestRequest (jobs index)          │
//! │  └── DocumentFetcher → key            (jobs index)          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  FilterExpression (Equality / Range / GeoWithin clauses)    │
//! │  SearchCriteria, SortMode                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  IndexService trait                                         │
//! │  ├── AzureSearchIndex (jobsearch-azure)                     │
//! │  └── MockIndexService (tests, `mock` feature)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use jobsearch_query::{JobsSearch, SearchCriteria, SortMode};
//!
//! let search = JobsSearch::from_init(jobsearch_azure::connect(&config));
//!
//! let criteria = SearchCriteria::new("analyst")
//!     .with_business_title("Data Analyst")
//!     .with_sort(SortMode::MostRecent);
//!
//! let page = search.search(&criteria).await?;
//! println!("{} matching postings", page.total_count);
//! ```

pub mod backend;
pub mod builder;
pub mod criteria;
pub mod document;
pub mod filter;
pub mod jobs;
pub mod lookup;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod request;
pub mod response;
pub mod schema;
pub mod suggest;
pub mod zip;

// Re-exports
pub use backend::{IndexConnection, IndexService};
pub use builder::{PAGE_SIZE, QueryBuilder};
pub use criteria::{SearchCriteria, SortMode};
pub use document::{JobDocument, ZipCodeDocument};
pub use filter::{FilterClause, FilterExpression};
pub use jobs::{ConnectionState, JobsSearch};
pub use lookup::DocumentFetcher;
pub use request::{
    FacetSpec, Highlight, OrderBy, Scoring, ScoringParameter, SearchMode, SearchRequest,
    SortDirection, SuggestRequest,
};
pub use response::{
    FacetBucket, FacetCounts, RawDocument, ResultPage, SearchHit, SearchResponse,
    SuggestResponse, Suggestion,
};
pub use suggest::{SUGGESTION_LIMIT, SuggestBuilder};
pub use zip::ZipResolver;

pub use jobsearch_core::{ConnectionInitError, GeoPoint, QueryError, Result};
