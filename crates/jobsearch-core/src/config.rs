//! Index service connection configuration.
//!
//! Configuration is resolved in this order:
//!
//! 1. An explicit path (`--config`, or `JOBSEARCH_CONFIG` in the CLI)
//! 2. `<platform config dir>/jobsearch/config.toml`
//!
//! A missing file at a default location is not an error; defaults are used
//! and environment overrides applied on top. Credentials usually arrive
//! through `JOBSEARCH_SERVICE_NAME`, `JOBSEARCH_API_KEY` and
//! `JOBSEARCH_ENDPOINT`.
//!
//! ```toml
//! service_name = "nycjobs-search"
//! api_key = "..."
//! jobs_index = "nycjobs"
//! zip_index = "zipcodes"
//! timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConnectionInitError;

/// Environment variable naming an explicit config file; read by the CLI.
pub const CONFIG_ENV: &str = "JOBSEARCH_CONFIG";
/// Environment override for [`IndexServiceConfig::service_name`].
pub const SERVICE_NAME_ENV: &str = "JOBSEARCH_SERVICE_NAME";
/// Environment override for [`IndexServiceConfig::api_key`].
pub const API_KEY_ENV: &str = "JOBSEARCH_API_KEY";
/// Environment override for [`IndexServiceConfig::endpoint`].
pub const ENDPOINT_ENV: &str = "JOBSEARCH_ENDPOINT";

/// Settings needed to reach the index service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexServiceConfig {
    /// Search service name; the endpoint is derived from it.
    #[serde(default)]
    pub service_name: String,

    /// Admin or query API key.
    #[serde(default)]
    pub api_key: String,

    /// Explicit endpoint URL, overriding the one derived from `service_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// REST API version sent with every request.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Index holding job postings.
    #[serde(default = "default_jobs_index")]
    pub jobs_index: String,

    /// Index holding zip codes.
    #[serde(default = "default_zip_index")]
    pub zip_index: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_version() -> String {
    "2020-06-30".to_string()
}

fn default_jobs_index() -> String {
    "nycjobs".to_string()
}

fn default_zip_index() -> String {
    "zipcodes".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for IndexServiceConfig {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            api_key: String::new(),
            endpoint: None,
            api_version: default_api_version(),
            jobs_index: default_jobs_index(),
            zip_index: default_zip_index(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl IndexServiceConfig {
    /// Load configuration from the resolved path and the process environment.
    ///
    /// An explicit `config_path` must exist; the default location may not.
    pub fn load(config_path: Option<&str>) -> Result<Self, ConnectionInitError> {
        let path = Self::resolve_config_path(config_path);
        Self::load_from(path.as_deref(), config_path.is_some(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Load from `path`, then overlay environment values read through `lookup`.
    pub fn load_from<F>(
        path: Option<&Path>,
        required: bool,
        lookup: F,
    ) -> Result<Self, ConnectionInitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) if path.exists() => {
                log::debug!("Loading config from {}", path.display());
                Self::from_file(path)?
            }
            Some(path) if required => {
                return Err(ConnectionInitError::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            Some(path) => {
                log::debug!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            None => {
                log::debug!("No config directory on this platform; using defaults");
                Self::default()
            }
        };
        config.apply_env_overrides(lookup);
        Ok(config)
    }

    /// Parse configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConnectionInitError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConnectionInitError::io_with_path(e, path))?;
        toml::from_str(&content).map_err(|e| {
            ConnectionInitError::config(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    /// Resolve which config file to read: `config_path` if given, else the
    /// platform default.
    pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
        match config_path {
            Some(path) => Some(expand_path(path)),
            None => Self::default_config_path(),
        }
    }

    /// Platform default location of the config file.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jobsearch").join("config.toml"))
    }

    /// Overlay values from the environment, read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(name) = get(SERVICE_NAME_ENV) {
            self.service_name = name;
        }
        if let Some(key) = get(API_KEY_ENV) {
            self.api_key = key;
        }
        if let Some(endpoint) = get(ENDPOINT_ENV) {
            self.endpoint = Some(endpoint);
        }
    }

    /// Check that the service can be addressed and authenticated against.
    pub fn validate(&self) -> Result<(), ConnectionInitError> {
        if self.service_name.trim().is_empty() && self.endpoint.is_none() {
            return Err(ConnectionInitError::config(
                "either service_name or endpoint must be set",
            ));
        }
        if self.api_key.trim().is_empty() {
            return Err(ConnectionInitError::config("api_key must be set"));
        }
        if self.jobs_index.trim().is_empty() || self.zip_index.trim().is_empty() {
            return Err(ConnectionInitError::config("index names must not be empty"));
        }
        Ok(())
    }

    /// Base URL of the search service.
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}.search.windows.net", self.service_name.trim()),
        }
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConnectionInitError> {
        toml::to_string_pretty(self).map_err(|e| ConnectionInitError::config(e.to_string()))
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

// ============================================================================
// Tests
// ============================================================================
