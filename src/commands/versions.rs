use crate::commands::{ArtifactFlags, OutputFlags};
use crate::error::CliError;
use crate::factory::{api_error, Factory};
use crate::resolve::resolve_group;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug, Default)]
pub struct VersionsArgs {
    /// Id of the artifact
    #[arg(value_name = "ARTIFACT")]
    pub artifact_arg: Option<String>,
    #[command(flatten)]
    pub target: ArtifactFlags,
    #[command(flatten)]
    pub output: OutputFlags,
}

pub async fn run(args: VersionsArgs, factory: &mut Factory) -> Result<()> {
    let artifact = args
        .target
        .artifact_id(args.artifact_arg.as_deref())
        .ok_or(CliError::ArtifactRequired)?;
    let api = factory.registry(args.target.registry_id.as_deref())?;
    let group = resolve_group(args.target.group.as_deref());

    tracing::info!("Fetching artifact versions");
    let versions = api
        .list_artifact_versions(&group, &artifact)
        .await
        .map_err(api_error)?;
    tracing::info!("Successfully fetched artifact versions");

    factory.render(&versions, args.output.output)?;
    Ok(())
}
