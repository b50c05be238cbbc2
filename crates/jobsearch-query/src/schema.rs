//! Names defined by the job and zip-code indexes.
//!
//! The indexes are managed elsewhere; these constants are the parts of their
//! schema that queries depend on.
//!
//! | Field | Used for |
//! |-------|----------|
//! | `id` | Document key |
//! | `business_title` | Facet, equality filter |
//! | `posting_type` | Facet, equality filter |
//! | `level` | Facet |
//! | `salary_range_from` | Interval facet, range filter, ordering |
//! | `posting_date` | Ordering |
//! | `job_description` | Highlighting |
//! | `geo_location` | Distance filter |

/// Document key.
pub const ID: &str = "id";
/// Hiring agency.
pub const AGENCY: &str = "agency";
/// Internal or external posting.
pub const POSTING_TYPE: &str = "posting_type";
/// Number of open positions.
pub const NUM_OF_POSITIONS: &str = "num_of_positions";
/// Job title.
pub const BUSINESS_TITLE: &str = "business_title";
/// Seniority level.
pub const LEVEL: &str = "level";
/// Lower salary bound.
pub const SALARY_RANGE_FROM: &str = "salary_range_from";
/// Upper salary bound.
pub const SALARY_RANGE_TO: &str = "salary_range_to";
/// Salary period (annual, hourly, ...).
pub const SALARY_FREQUENCY: &str = "salary_frequency";
/// Street address of the job.
pub const WORK_LOCATION: &str = "work_location";
/// Full description text.
pub const JOB_DESCRIPTION: &str = "job_description";
/// Publication date.
pub const POSTING_DATE: &str = "posting_date";
/// GeoJSON point of the work location.
pub const GEO_LOCATION: &str = "geo_location";
/// Free-form tags.
pub const TAGS: &str = "tags";

/// Fields returned for every job search hit.
pub const JOB_FIELDS: [&str; 13] = [
    ID,
    AGENCY,
    POSTING_TYPE,
    NUM_OF_POSITIONS,
    BUSINESS_TITLE,
    SALARY_RANGE_FROM,
    SALARY_RANGE_TO,
    SALARY_FREQUENCY,
    WORK_LOCATION,
    JOB_DESCRIPTION,
    POSTING_DATE,
    GEO_LOCATION,
    TAGS,
];

/// Width of a salary facet bucket.
pub const SALARY_BUCKET_WIDTH: u64 = 50_000;

/// Scoring profile used for featured ordering.
pub const FEATURED_SCORING_PROFILE: &str = "jobsScoringFeatured";
/// Scoring parameter enabling the featured boost.
pub const FEATURED_PARAM: &str = "featuredParam";
/// Scoring parameter carrying the distance boost center.
pub const MAP_CENTER_PARAM: &str = "mapCenterParam";

/// Suggester defined on the job index.
pub const SUGGESTER: &str = "sg";
