//! Handler functions for config CLI commands.

use std::path::{Path, PathBuf};

use jobsearch_core::{ConnectionInitError, IndexServiceConfig};

use crate::cli::ConfigAction;

type Result<T> = std::result::Result<T, ConnectionInitError>;

const REDACTED: &str = "********";

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => {
            let config = IndexServiceConfig::load(config_path)?;
            print!("{}", redacted(config).to_toml_string()?);
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = match file.as_deref().or(config_path) {
                Some(p) => PathBuf::from(shellexpand::tilde(p).into_owned()),
                None => IndexServiceConfig::default_config_path().ok_or_else(|| {
                    ConnectionInitError::config("Could not determine config directory")
                })?,
            };
            init_config(&path, force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match IndexServiceConfig::resolve_config_path(config_path) {
        Some(path) => {
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(file does not exist; run `jobsearch config init` to create it)");
            }
            Ok(())
        }
        None => Err(ConnectionInitError::config(
            "Could not determine config directory for this platform",
        )),
    }
}

/// Write a default configuration file at `path`.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConnectionInitError::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| ConnectionInitError::io_with_path(e, parent))?;
    }

    let toml_str = IndexServiceConfig::default().to_toml_string()?;
    std::fs::write(path, toml_str).map_err(|e| ConnectionInitError::io_with_path(e, path))
}

/// Copy of `config` safe to print.
pub fn redacted(mut config: IndexServiceConfig) -> IndexServiceConfig {
    if !config.api_key.is_empty() {
        config.api_key = REDACTED.to_string();
    }
    config
}

// ============================================================================
// Tests
// ============================================================================
