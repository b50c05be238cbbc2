//! jobsearch CLI
//!
//! Command-line interface for querying job postings.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use jobsearch_cli::cli::{Cli, Command};
use jobsearch_cli::{commands, config_handlers};
use jobsearch_core::IndexServiceConfig;
use jobsearch_query::JobsSearch;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let output = match cli.command {
        Command::Config { action } => {
            config_handlers::handle_config_command(config_path, action)?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Search(args) => {
            let jobs = connect(config_path)?;
            commands::render(&commands::search(&jobs, &args).await?)?
        }
        Command::Zip { zip_code } => {
            let jobs = connect(config_path)?;
            commands::render(&commands::zip(&jobs, &zip_code).await?)?
        }
        Command::Suggest { text, fuzzy } => {
            let jobs = connect(config_path)?;
            commands::render(&commands::suggest(&jobs, &text, fuzzy).await?)?
        }
        Command::Lookup { id } => {
            let jobs = connect(config_path)?;
            match commands::lookup(&jobs, &id).await? {
                Some(document) => commands::render(&document)?,
                None => {
                    eprintln!("No job posting with id '{}'", id.trim());
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    };

    println!("{output}");
    Ok(ExitCode::SUCCESS)
}

/// Load configuration and set up the index connection.
///
/// A connection failure is not fatal here; the query reports it.
fn connect(config_path: Option<&str>) -> Result<JobsSearch> {
    let config = IndexServiceConfig::load(config_path)?;
    let jobs = JobsSearch::from_init(jobsearch_azure::connect(&config));
    tracing::debug!(state = %jobs.state(), "index connection");
    Ok(jobs)
}
