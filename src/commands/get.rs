use crate::commands::ArtifactFlags;
use crate::error::CliError;
use crate::factory::{api_error, Factory};
use crate::resolve::resolve_group;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct GetArgs {
    /// Id of the artifact
    #[arg(value_name = "ARTIFACT")]
    pub artifact_arg: Option<String>,
    /// File the content is written to. Printed to standard output when omitted
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file_arg: Option<PathBuf>,
    #[command(flatten)]
    pub target: ArtifactFlags,
    /// Fetch this version instead of the latest one
    #[arg(long = "version")]
    pub version: Option<String>,
    /// File the content is written to
    #[arg(long = "outputFile", conflicts_with = "output_file_arg")]
    pub output_file: Option<PathBuf>,
}

pub async fn run(args: GetArgs, factory: &mut Factory) -> Result<()> {
    let artifact = args
        .target
        .artifact_id(args.artifact_arg.as_deref())
        .ok_or(CliError::ArtifactRequired)?;
    let api = factory.registry(args.target.registry_id.as_deref())?;
    let group = resolve_group(args.target.group.as_deref());

    tracing::info!("Fetching artifact");
    let content = match args.version.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(version) => api.get_artifact_version(&group, &artifact, version).await,
        None => api.get_latest_artifact(&group, &artifact).await,
    }
    .map_err(api_error)?;

    let output_file = args.output_file_arg.or(args.output_file);
    factory.write_content(&content, output_file.as_deref())?;
    tracing::info!("Successfully fetched artifact");
    Ok(())
}
