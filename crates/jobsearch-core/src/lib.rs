//! jobsearch core: shared errors, configuration, and geographic types.
//!
//! This crate has no internal jobsearch dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: [`QueryError`], [`ConnectionInitError`] and the `Result` alias
//! - [`config`]: [`IndexServiceConfig`] loading and validation
//! - [`geo`]: validated [`GeoPoint`] with GeoJSON serialization

pub mod config;
pub mod error;
pub mod geo;

// Re-export key types at crate root for convenience
pub use config::IndexServiceConfig;
pub use error::{ConnectionInitError, QueryError, Result};
pub use geo::GeoPoint;
