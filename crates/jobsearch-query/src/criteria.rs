//! User-facing search criteria.
//!
//! [`SearchCriteria`] mirrors what a search form submits: loosely typed,
//! mostly optional, with facet values as raw strings. Nothing here is
//! validated; [`QueryBuilder`](crate::QueryBuilder) does that when it turns
//! criteria into a request.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Result ordering requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Rank with the featured scoring profile, boosted around the user.
    Featured,
    /// Highest starting salary first.
    SalaryDescending,
    /// Lowest starting salary first.
    SalaryAscending,
    /// Newest postings first.
    MostRecent,
    /// Index relevance.
    #[default]
    Default,
}

impl SortMode {
    /// Map a form label to a sort mode.
    ///
    /// Recognizes the labels the search page sends (`featured`, `salaryDesc`,
    /// `salaryIncr`, `mostRecent`) as well as the snake_case names. Anything
    /// else falls back to [`SortMode::Default`].
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "featured" => SortMode::Featured,
            "salaryDesc" | "salary_descending" => SortMode::SalaryDescending,
            "salaryIncr" | "salary_ascending" => SortMode::SalaryAscending,
            "mostRecent" | "most_recent" => SortMode::MostRecent,
            _ => SortMode::Default,
        }
    }

    /// The form label for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::SalaryDescending => "salaryDesc",
            SortMode::SalaryAscending => "salaryIncr",
            SortMode::MostRecent => "mostRecent",
            SortMode::Default => "default",
        }
    }
}

impl FromStr for SortMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a user can ask of the job search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Free-text query; empty means "match everything".
    #[serde(default)]
    pub free_text: String,

    /// Selected business title facet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_title_facet: Option<String>,

    /// Selected posting type facet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_type_facet: Option<String>,

    /// Selected salary bucket label; its value is the bucket floor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range_facet: Option<String>,

    /// Requested ordering.
    #[serde(default)]
    pub sort_mode: SortMode,

    /// User latitude, used by the featured scoring profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_latitude: Option<f64>,

    /// User longitude, used by the featured scoring profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_longitude: Option<f64>,

    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,

    /// Maximum distance in kilometers; 0 disables the distance filter.
    #[serde(default)]
    pub max_distance_km: u32,

    /// Latitude of the distance filter center, as typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_latitude: Option<String>,

    /// Longitude of the distance filter center, as typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_longitude: Option<String>,
}

fn default_page() -> u32 {
    1
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            free_text: String::new(),
            business_title_facet: None,
            posting_type_facet: None,
            salary_range_facet: None,
            sort_mode: SortMode::default(),
            origin_latitude: None,
            origin_longitude: None,
            page: default_page(),
            max_distance_km: 0,
            bounding_latitude: None,
            bounding_longitude: None,
        }
    }
}

impl SearchCriteria {
    /// Criteria for a plain text search on the first page.
    pub fn new(free_text: impl Into<String>) -> Self {
        Self {
            free_text: free_text.into(),
            ..Default::default()
        }
    }

    /// Set the business title facet.
    pub fn with_business_title(mut self, title: impl Into<String>) -> Self {
        self.business_title_facet = Some(title.into());
        self
    }

    /// Set the posting type facet.
    pub fn with_posting_type(mut self, posting_type: impl Into<String>) -> Self {
        self.posting_type_facet = Some(posting_type.into());
        self
    }

    /// Set the salary bucket label.
    pub fn with_salary_range(mut self, floor: impl Into<String>) -> Self {
        self.salary_range_facet = Some(floor.into());
        self
    }

    /// Set the sort mode.
    pub fn with_sort(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    /// Set the user's position.
    pub fn with_origin(mut self, latitude: f64, longitude: f64) -> Self {
        self.origin_latitude = Some(latitude);
        self.origin_longitude = Some(longitude);
        self
    }

    /// Set the page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Restrict results to `km` kilometers around the given point.
    pub fn with_max_distance(
        mut self,
        km: u32,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        self.max_distance_km = km;
        self.bounding_latitude = Some(latitude.into());
        self.bounding_longitude = Some(longitude.into());
        self
    }

    /// Business title facet, if selected.
    pub fn business_title(&self) -> Option<&str> {
        non_empty(&self.business_title_facet)
    }

    /// Posting type facet, if selected.
    pub fn posting_type(&self) -> Option<&str> {
        non_empty(&self.posting_type_facet)
    }

    /// Salary bucket label, if selected.
    pub fn salary_range(&self) -> Option<&str> {
        non_empty(&self.salary_range_facet)
    }
}

// Forms post unselected facets as "".
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ============================================================================
// Tests
// ============================================================================
