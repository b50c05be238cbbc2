//! Primary search request construction.
//!
//! [`QueryBuilder`] turns [`SearchCriteria`] into a [`SearchRequest`]. Each
//! step is a separate method so it can be tested on its own:
//!
//! 1. [`select`](QueryBuilder::select): fixed field projection
//! 2. [`highlight`](QueryBuilder::highlight): `<b>`/`</b>` on the description
//! 3. [`facets`](QueryBuilder::facets): fixed four facets
//! 4. [`apply_sort`](QueryBuilder::apply_sort): scoring profile *or* ordering
//! 5. [`filter`](QueryBuilder::filter): conjunctive filter, title → posting
//!    type → salary → distance
//! 6. [`paginate`](QueryBuilder::paginate): page size and skip offset
//!
//! The skip offset is `page - 1` records, not `(page - 1) * page_size`.
//! Callers that want page-sized steps must pass an already scaled page.

use jobsearch_core::{GeoPoint, QueryError, Result};

use crate::criteria::{SearchCriteria, SortMode};
use crate::filter::{FilterClause, FilterExpression};
use crate::request::{
    FacetSpec, Highlight, OrderBy, Scoring, ScoringParameter, SearchMode, SearchRequest,
};
use crate::schema;

/// Results per page.
pub const PAGE_SIZE: usize = 10;

/// Query text matching every document.
pub const MATCH_ALL: &str = "*";

/// Marker placed before a highlighted span.
pub const HIGHLIGHT_PRE_TAG: &str = "<b>";

/// Marker placed after a highlighted span.
pub const HIGHLIGHT_POST_TAG: &str = "</b>";

/// Builder for the primary job search request.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBuilder;

impl QueryBuilder {
    /// Create a new query builder.
    pub fn new() -> Self {
        Self
    }

    /// Build the complete request for `criteria`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidInput`] when the page is 0, the salary
    /// label is not a non-negative integer, a distance filter has malformed
    /// coordinates, or featured sorting lacks an origin.
    pub fn build(&self, criteria: &SearchCriteria) -> Result<SearchRequest> {
        let mut request = SearchRequest::new(Self::search_text(&criteria.free_text));
        request.search_mode = SearchMode::Any;
        request.select = Self::select();
        request.highlight = Some(Self::highlight());
        request.facets = Self::facets();
        Self::apply_sort(&mut request, criteria)?;
        request.filter = Self::filter(criteria)?;
        Self::paginate(&mut request, criteria.page)?;

        log::debug!(
            "Built search: text='{}', filter={:?}, skip={}",
            request.search_text,
            request.filter.as_ref().map(ToString::to_string),
            request.skip
        );
        Ok(request)
    }

    /// Empty or blank text becomes the match-all query.
    pub fn search_text(free_text: &str) -> String {
        if free_text.trim().is_empty() {
            MATCH_ALL.to_string()
        } else {
            free_text.to_string()
        }
    }

    /// The fixed field projection.
    pub fn select() -> Vec<String> {
        schema::JOB_FIELDS.iter().map(|f| (*f).to_string()).collect()
    }

    /// Highlighting on the job description.
    pub fn highlight() -> Highlight {
        Highlight {
            fields: vec![schema::JOB_DESCRIPTION.to_string()],
            pre_tag: HIGHLIGHT_PRE_TAG.to_string(),
            post_tag: HIGHLIGHT_POST_TAG.to_string(),
        }
    }

    /// The fixed facet set, regardless of selected filters.
    pub fn facets() -> Vec<FacetSpec> {
        vec![
            FacetSpec::values(schema::BUSINESS_TITLE),
            FacetSpec::values(schema::POSTING_TYPE),
            FacetSpec::values(schema::LEVEL),
            FacetSpec::interval(schema::SALARY_RANGE_FROM, schema::SALARY_BUCKET_WIDTH),
        ]
    }

    /// Select either a scoring profile or explicit ordering.
    pub fn apply_sort(request: &mut SearchRequest, criteria: &SearchCriteria) -> Result<()> {
        match criteria.sort_mode {
            SortMode::Featured => {
                let (Some(lat), Some(lon)) = (criteria.origin_latitude, criteria.origin_longitude)
                else {
                    return Err(QueryError::invalid_input(
                        "origin",
                        "featured sorting requires an origin latitude and longitude",
                    ));
                };
                let center = GeoPoint::new(lon, lat)?;
                request.scoring = Some(Scoring {
                    profile: schema::FEATURED_SCORING_PROFILE.to_string(),
                    parameters: vec![
                        ScoringParameter::new(schema::FEATURED_PARAM, ["featured"]),
                        ScoringParameter::new(
                            schema::MAP_CENTER_PARAM,
                            [
                                center.longitude().to_string(),
                                center.latitude().to_string(),
                            ],
                        ),
                    ],
                });
            }
            SortMode::SalaryDescending => {
                request.order_by.push(OrderBy::desc(schema::SALARY_RANGE_FROM));
            }
            SortMode::SalaryAscending => {
                request.order_by.push(OrderBy::asc(schema::SALARY_RANGE_FROM));
            }
            SortMode::MostRecent => {
                request.order_by.push(OrderBy::desc(schema::POSTING_DATE));
            }
            SortMode::Default => {}
        }
        Ok(())
    }

    /// Compose the filter; `None` when no criterion applies.
    pub fn filter(criteria: &SearchCriteria) -> Result<Option<FilterExpression>> {
        let mut filter = FilterExpression::new();

        if let Some(title) = criteria.business_title() {
            filter.push(FilterClause::equals(schema::BUSINESS_TITLE, title));
        }

        if let Some(posting_type) = criteria.posting_type() {
            filter.push(FilterClause::equals(schema::POSTING_TYPE, posting_type));
        }

        if let Some(label) = criteria.salary_range() {
            let floor = Self::salary_floor(label)?;
            let ceiling = floor.checked_add(schema::SALARY_BUCKET_WIDTH).ok_or_else(|| {
                QueryError::invalid_input("salary_range_facet", format!("{floor} is too large"))
            })?;
            filter.push(FilterClause::half_open_range(
                schema::SALARY_RANGE_FROM,
                floor,
                ceiling,
            ));
        }

        if criteria.max_distance_km > 0 {
            let center = GeoPoint::parse(
                criteria.bounding_longitude.as_deref(),
                criteria.bounding_latitude.as_deref(),
                "bounding_longitude",
                "bounding_latitude",
            )?;
            filter.push(FilterClause::geo_within(
                schema::GEO_LOCATION,
                center,
                criteria.max_distance_km,
            ));
        }

        Ok(filter.into_option())
    }

    /// Parse a salary bucket label into its floor.
    pub fn salary_floor(label: &str) -> Result<u64> {
        label.trim().parse::<u64>().map_err(|_| {
            QueryError::invalid_input(
                "salary_range_facet",
                format!("'{label}' is not a non-negative integer"),
            )
        })
    }

    /// Set page size, skip offset, and total count.
    pub fn paginate(request: &mut SearchRequest, page: u32) -> Result<()> {
        if page == 0 {
            return Err(QueryError::invalid_input("page", "pages start at 1"));
        }
        request.top = PAGE_SIZE;
        request.skip = (page - 1) as usize;
        request.include_total_count = true;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
