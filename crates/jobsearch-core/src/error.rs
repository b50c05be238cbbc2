//! Error types for jobsearch-core.
//!
//! Two families of errors exist:
//!
//! - [`ConnectionInitError`]: raised once, while the index connection is being
//!   set up (bad configuration, unusable HTTP client).
//! - [`QueryError`]: raised per call by the query operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors returned by a single query operation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum QueryError {
    /// A caller-supplied value cannot be shaped into the clause it feeds.
    #[error("Invalid input for {field}: {message}")]
    InvalidInput {
        /// Criteria field that failed to parse
        field: &'static str,
        /// What went wrong
        message: String,
    },

    /// The index service failed (network, auth, malformed response).
    #[error("Transport failure: {message}")]
    TransportFailure {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The connection failed to initialize; no request was attempted.
    #[error("Index service unavailable: {reason}")]
    Unavailable {
        /// Why the connection could not be established
        reason: String,
    },
}

impl QueryError {
    /// Creates a new invalid-input error.
    pub fn invalid_input<M: Into<String>>(field: &'static str, message: M) -> Self {
        QueryError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Creates a new transport failure with a message.
    pub fn transport<S: Into<String>>(message: S) -> Self {
        QueryError::TransportFailure {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new transport failure with a message and source error.
    pub fn transport_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        QueryError::TransportFailure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new unavailable error.
    pub fn unavailable<S: Into<String>>(reason: S) -> Self {
        QueryError::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the caller supplied malformed criteria.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, QueryError::InvalidInput { .. })
    }

    /// Returns `true` if the index service itself failed or was never reached.
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            QueryError::TransportFailure { .. } | QueryError::Unavailable { .. }
        )
    }
}

/// Errors raised while establishing the index connection.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConnectionInitError {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A configuration file could not be read.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client for the index service could not be built.
    #[error("Client error: {message}")]
    Client {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConnectionInitError {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConnectionInitError::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error tagged with the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ConnectionInitError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a new client error with a message and source error.
    pub fn client_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        ConnectionInitError::Client {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
