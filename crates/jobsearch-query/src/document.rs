//! Read-only projections of index documents.
//!
//! Every field except the key is optional: the index may store nulls, and
//! these types must never reject a document because a field is empty.

use chrono::{DateTime, Utc};
use jobsearch_core::GeoPoint;
use serde::{Deserialize, Serialize};

use crate::response::RawDocument;

/// A job posting, limited to the fields the search page displays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDocument {
    /// Document key.
    pub id: String,
    /// Hiring agency.
    #[serde(default)]
    pub agency: Option<String>,
    /// Internal or external posting.
    #[serde(default)]
    pub posting_type: Option<String>,
    /// Number of open positions.
    #[serde(default)]
    pub num_of_positions: Option<u32>,
    /// Job title.
    #[serde(default)]
    pub business_title: Option<String>,
    /// Lower salary bound.
    #[serde(default)]
    pub salary_range_from: Option<f64>,
    /// Upper salary bound.
    #[serde(default)]
    pub salary_range_to: Option<f64>,
    /// Salary period (annual, hourly, ...).
    #[serde(default)]
    pub salary_frequency: Option<String>,
    /// Street address of the job.
    #[serde(default)]
    pub work_location: Option<String>,
    /// Full description.
    #[serde(default)]
    pub job_description: Option<String>,
    /// Publication date.
    #[serde(default)]
    pub posting_date: Option<DateTime<Utc>>,
    /// Work location coordinates.
    #[serde(default)]
    pub geo_location: Option<GeoPoint>,
    /// Free-form tags.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// An entry of the zip-code index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZipCodeDocument {
    /// Five-digit zip code.
    #[serde(default)]
    pub zipcode: Option<String>,
    /// City name.
    #[serde(default)]
    pub city: Option<String>,
    /// State abbreviation.
    #[serde(default)]
    pub state: Option<String>,
    /// Centroid latitude.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Centroid longitude.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Any other fields the index returns.
    #[serde(flatten)]
    pub extra: RawDocument,
}

impl ZipCodeDocument {
    /// The centroid as `(latitude, longitude)`, when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Tests
// ============================================================================
