//! # Apicurio Artifacts CLI
//!
//! Manage the artifacts stored in an Apicurio Registry instance.
//!
//! ## Quick Start
//!
//! ```bash
//! # Register an instance and select it
//! apicurio-artifacts registry add dev http://localhost:8080/apis/registry/v2 --use
//!
//! # Create an artifact from a file
//! apicurio-artifacts create schema.json --artifact user --type JSON
//!
//! # Print its latest content
//! apicurio-artifacts get user
//!
//! # Delete it without prompting
//! apicurio-artifacts delete user --yes
//! ```

use anyhow::Result;
use apicurio_artifacts::{commands, factory::Factory, logging, Cli};
use clap::Parser;

/// Entry point for the artifacts CLI
///
/// Sets up logging from the verbosity flags, then runs the requested command
/// against the real configuration file, registry connector and terminal.
/// Exits with status 1 when no command is given.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let cmd = cli.cmd.unwrap_or_else(|| {
        eprintln!("No command provided. Use --help to see available commands.");
        std::process::exit(1);
    });
    let mut factory = Factory::from_env();
    commands::run(cmd, &mut factory).await
}
