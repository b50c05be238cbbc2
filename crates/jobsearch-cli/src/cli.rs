//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use jobsearch_core::config::CONFIG_ENV;

/// Query the job posting index from the command line
#[derive(Parser, Debug)]
#[command(name = "jobsearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search job postings
    Search(SearchArgs),
    /// Resolve a zip code to its city and coordinates
    Zip {
        /// Zip code
        zip_code: String,
    },
    /// Autocomplete a partial job title
    Suggest {
        /// Text typed so far
        text: String,
        /// Tolerate typos
        #[arg(long)]
        fuzzy: bool,
    },
    /// Fetch a single job posting by id
    Lookup {
        /// Job posting id
        id: String,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct SearchArgs {
    /// Free text; empty matches every posting
    #[arg(default_value = "")]
    pub text: String,

    /// Only postings with this exact business title
    #[arg(long)]
    pub business_title: Option<String>,

    /// Only postings of this type (e.g. "Internal", "External")
    #[arg(long)]
    pub posting_type: Option<String>,

    /// Only postings whose salary floor falls in the $50,000 band starting here
    #[arg(long, value_name = "AMOUNT")]
    pub salary_from: Option<String>,

    /// featured, salaryDesc, salaryIncr or mostRecent (featured needs --zip or --lat/--lon)
    #[arg(long, default_value = "")]
    pub sort: String,

    /// Latitude of the map center
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude of the map center
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Center the map on this zip code instead of --lat/--lon
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub zip: Option<String>,

    /// Only postings within this many kilometers of the map center
    #[arg(long, value_name = "KM")]
    pub within: Option<u32>,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration with the API key redacted
    Show,
    /// Create a default config file
    Init {
        /// Write here instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
