//! Query command handlers.
//!
//! Each handler runs one operation on a [`JobsSearch`] and returns the
//! typed result; `main` renders it.

use jobsearch_query::{
    JobDocument, JobsSearch, QueryError, Result, ResultPage, SearchCriteria, SortMode, Suggestion,
    ZipCodeDocument,
};
use serde::Serialize;

use crate::cli::SearchArgs;

/// Run a job search.
///
/// With `--zip`, the zip code is resolved first and its coordinates serve
/// as the map center for featured sorting and the distance filter.
pub async fn search(jobs: &JobsSearch, args: &SearchArgs) -> Result<ResultPage<JobDocument>> {
    let center = match (&args.zip, args.lat, args.lon) {
        (Some(zip), _, _) => Some(resolve_zip(jobs, zip).await?),
        (None, Some(lat), Some(lon)) => Some((lat, lon)),
        _ => None,
    };
    let criteria = criteria(args, center)?;
    jobs.search(&criteria).await
}

/// Translate command-line arguments into search criteria.
pub fn criteria(args: &SearchArgs, center: Option<(f64, f64)>) -> Result<SearchCriteria> {
    let sort = SortMode::from_label(&args.sort);
    if sort == SortMode::Featured && center.is_none() {
        return Err(QueryError::invalid_input(
            "sort",
            "featured sorting needs --zip or --lat/--lon",
        ));
    }
    let mut criteria = SearchCriteria::new(args.text.clone())
        .with_sort(sort)
        .with_page(args.page);
    if let Some(title) = &args.business_title {
        criteria = criteria.with_business_title(title.clone());
    }
    if let Some(posting_type) = &args.posting_type {
        criteria = criteria.with_posting_type(posting_type.clone());
    }
    if let Some(salary) = &args.salary_from {
        criteria = criteria.with_salary_range(salary.clone());
    }
    if let Some((lat, lon)) = center {
        criteria = criteria.with_origin(lat, lon);
    }
    if let Some(km) = args.within {
        let (lat, lon) = center.ok_or_else(|| {
            QueryError::invalid_input("within", "a distance filter needs --zip or --lat/--lon")
        })?;
        criteria = criteria.with_max_distance(km, lat.to_string(), lon.to_string());
    }
    Ok(criteria)
}

async fn resolve_zip(jobs: &JobsSearch, zip: &str) -> Result<(f64, f64)> {
    let page = jobs.search_zip(zip).await?;
    page.documents
        .first()
        .and_then(ZipCodeDocument::coordinates)
        .ok_or_else(|| QueryError::invalid_input("zip", format!("unknown zip code '{zip}'")))
}

/// Resolve a zip code.
pub async fn zip(jobs: &JobsSearch, zip_code: &str) -> Result<ResultPage<ZipCodeDocument>> {
    jobs.search_zip(zip_code).await
}

/// Autocomplete partial text.
pub async fn suggest(jobs: &JobsSearch, text: &str, fuzzy: bool) -> Result<Vec<Suggestion>> {
    jobs.suggest(text, fuzzy).await
}

/// Fetch one posting.
pub async fn lookup(jobs: &JobsSearch, id: &str) -> Result<Option<JobDocument>> {
    jobs.look_up(id).await
}

/// Render a result as pretty-printed JSON.
pub fn render<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

// ============================================================================
// Tests
// ============================================================================
