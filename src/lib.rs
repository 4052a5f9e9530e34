//! # Apicurio Artifacts CLI Library
//!
//! Every artifact command runs the same pipeline: resolve the target registry
//! and flags, call the registry REST API, then render the result as JSON, YAML
//! or raw content.

use clap::Parser;

pub mod commands;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod factory;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod registry;
pub mod render;
pub mod resolve;

/// CLI tool for managing artifacts in an Apicurio Registry instance
///
/// Create, fetch, update, delete and inspect schema and API artifacts. The
/// target registry comes from `--registryId` or from the instance selected with
/// `apicurio-artifacts use`.
#[derive(Parser, Debug)]
#[command(
    name = "apicurio-artifacts",
    version,
    about = "CLI tool for managing artifacts in an Apicurio Registry instance",
    long_about = "Manage the schema and API artifacts stored in an Apicurio Registry instance.\n\nArtifacts can be created, fetched, updated and deleted, and their versions and metadata inspected.\nResults are printed as JSON (default) or YAML; artifact content is printed verbatim."
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub cmd: Option<commands::Commands>,
}
