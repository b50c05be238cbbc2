//! Structured filter expressions.
//!
//! Filters are built as a list of typed clauses and only turned into the
//! index's OData filter syntax at the transport boundary, via [`Display`].
//! Clauses are always joined with `and`; OR and NOT are not supported.
//!
//! ```rust
//! use jobsearch_query::filter::{FilterClause, FilterExpression};
//!
//! let mut filter = FilterExpression::new();
//! filter.push(FilterClause::equals("business_title", "Data Analyst"));
//! filter.push(FilterClause::half_open_range("salary_range_from", 50000, 100000));
//!
//! assert_eq!(
//!     filter.to_string(),
//!     "business_title eq 'Data Analyst' and \
//!      salary_range_from ge 50000 and salary_range_from lt 100000"
//! );
//! ```
//!
//! [`Display`]: std::fmt::Display

use std::fmt;

use jobsearch_core::GeoPoint;
use serde::{Deserialize, Serialize};

/// A single predicate over one index field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterClause {
    /// `field == value`, exact match.
    Equality {
        /// Field name
        field: String,
        /// Literal to compare against
        value: String,
    },
    /// `lower <= field < upper`.
    Range {
        /// Field name
        field: String,
        /// Inclusive lower bound
        lower: u64,
        /// Exclusive upper bound
        upper: u64,
    },
    /// Distance between `field` and `center` is at most `radius_km`.
    GeoWithin {
        /// Geography field name
        field: String,
        /// Center of the search circle
        center: GeoPoint,
        /// Radius in kilometers
        radius_km: u32,
    },
}

impl FilterClause {
    /// Build an equality clause.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        FilterClause::Equality {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Build a half-open range clause `[lower, upper)`.
    pub fn half_open_range(field: impl Into<String>, lower: u64, upper: u64) -> Self {
        FilterClause::Range {
            field: field.into(),
            lower,
            upper,
        }
    }

    /// Build a geo-distance clause.
    pub fn geo_within(field: impl Into<String>, center: GeoPoint, radius_km: u32) -> Self {
        FilterClause::GeoWithin {
            field: field.into(),
            center,
            radius_km,
        }
    }

    /// The field this clause constrains.
    pub fn field(&self) -> &str {
        match self {
            FilterClause::Equality { field, .. }
            | FilterClause::Range { field, .. }
            | FilterClause::GeoWithin { field, .. } => field,
        }
    }
}

impl fmt::Display for FilterClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterClause::Equality { field, value } => {
                write!(f, "{field} eq '{}'", escape_literal(value))
            }
            FilterClause::Range {
                field,
                lower,
                upper,
            } => write!(f, "{field} ge {lower} and {field} lt {upper}"),
            FilterClause::GeoWithin {
                field,
                center,
                radius_km,
            } => write!(
                f,
                "geo.distance({field}, geography'POINT({center})') le {radius_km}"
            ),
        }
    }
}

/// OData string literals escape a single quote by doubling it.
fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// An ordered conjunction of clauses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterExpression {
    clauses: Vec<FilterClause>,
}

impl FilterExpression {
    /// Create an empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause; clauses render in insertion order.
    pub fn push(&mut self, clause: FilterClause) {
        self.clauses.push(clause);
    }

    /// Builder-style [`push`](Self::push).
    pub fn and(mut self, clause: FilterClause) -> Self {
        self.push(clause);
        self
    }

    /// The clauses, in order.
    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns `true` if no clause has been added.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// `None` for an empty expression, so "no filter" is never an empty string.
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

impl FromIterator<FilterClause> for FilterExpression {
    fn from_iter<I: IntoIterator<Item = FilterClause>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
