//! # jobsearch-cli
//!
//! Command-line front end for the job search query layer:
//! - `search`, `zip`, `suggest`, `lookup` run the four query operations
//!   against the configured Azure Cognitive Search service and print JSON
//! - `config path|show|init` manage the TOML config file

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
