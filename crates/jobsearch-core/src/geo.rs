//! Geographic points.
//!
//! The index stores locations as GeoJSON points, whose coordinate pair is
//! `[longitude, latitude]`. [`GeoPoint`] keeps that order everywhere so a
//! point built from UI strings and a point read back from a document agree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, Result};

/// A validated WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoJsonPoint", into = "GeoJsonPoint")]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    /// Create a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(QueryError::invalid_input(
                "longitude",
                format!("{longitude} is outside [-180, 180]"),
            ));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(QueryError::invalid_input(
                "latitude",
                format!("{latitude} is outside [-90, 90]"),
            ));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Parse a point from the raw strings a form submits.
    ///
    /// Missing, empty, or non-numeric values are reported as invalid input
    /// against the given field names.
    pub fn parse(
        longitude: Option<&str>,
        latitude: Option<&str>,
        longitude_field: &'static str,
        latitude_field: &'static str,
    ) -> Result<Self> {
        let lon = parse_coordinate(longitude, longitude_field)?;
        let lat = parse_coordinate(latitude, latitude_field)?;
        Self::new(lon, lat).map_err(|e| match e {
            QueryError::InvalidInput { field, message } => QueryError::InvalidInput {
                field: if field == "longitude" {
                    longitude_field
                } else {
                    latitude_field
                },
                message,
            },
            other => other,
        })
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

/// Renders as `longitude latitude`, the order used by WKT points.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.longitude, self.latitude)
    }
}

fn parse_coordinate(raw: Option<&str>, field: &'static str) -> Result<f64> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| QueryError::invalid_input(field, "a coordinate is required"))?;
    raw.parse::<f64>()
        .map_err(|_| QueryError::invalid_input(field, format!("'{raw}' is not a coordinate")))
}

#[derive(Serialize, Deserialize)]
struct GeoJsonPoint {
    #[serde(rename = "type")]
    kind: String,
    coordinates: [f64; 2],
}

impl TryFrom<GeoJsonPoint> for GeoPoint {
    type Error = String;

    fn try_from(value: GeoJsonPoint) -> std::result::Result<Self, Self::Error> {
        if value.kind != "Point" {
            return Err(format!("expected a GeoJSON Point, got '{}'", value.kind));
        }
        let [lon, lat] = value.coordinates;
        GeoPoint::new(lon, lat).map_err(|e| e.to_string())
    }
}

impl From<GeoPoint> for GeoJsonPoint {
    fn from(point: GeoPoint) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [point.longitude, point.latitude],
        }
    }
}
