use crate::commands::{ArtifactFlags, OutputFlags};
use crate::content::ContentSource;
use crate::error::CliError;
use crate::factory::{api_error, Factory};
use crate::resolve::resolve_group;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Content must match the artifact's type; on success it becomes the latest version
#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Id of the artifact
    #[arg(value_name = "ARTIFACT")]
    pub artifact_arg: Option<String>,
    /// File location of the new content. Standard input is read when omitted
    #[arg(value_name = "FILE")]
    pub file_arg: Option<PathBuf>,
    /// File location of the new content
    #[arg(short = 'f', long = "file", conflicts_with = "file_arg")]
    pub file: Option<PathBuf>,
    #[command(flatten)]
    pub target: ArtifactFlags,
    #[command(flatten)]
    pub output: OutputFlags,
}

pub async fn run(args: UpdateArgs, factory: &mut Factory) -> Result<()> {
    let artifact = args
        .target
        .artifact_id(args.artifact_arg.as_deref())
        .ok_or(CliError::ArtifactRequired)?;
    let api = factory.registry(args.target.registry_id.as_deref())?;
    let group = resolve_group(args.target.group.as_deref());

    let file = args.file_arg.or(args.file);
    let content = ContentSource::resolve(file.as_deref())?;

    let metadata = api
        .update_artifact(&group, &artifact, content)
        .await
        .map_err(api_error)?;
    tracing::info!("Artifact updated");

    factory.render(&metadata, args.output.output)?;
    Ok(())
}
