use crate::commands::{ArtifactFlags, OutputFlags};
use crate::error::CliError;
use crate::factory::{api_error, Factory};
use crate::model::EditableMetadata;
use crate::resolve::resolve_group;
use anyhow::Result;
use clap::Args;

/// Prints the artifact's metadata; `--name`/`--description` edit it first
#[derive(Args, Debug, Default)]
pub struct MetadataArgs {
    /// Id of the artifact
    #[arg(value_name = "ARTIFACT")]
    pub artifact_arg: Option<String>,
    #[command(flatten)]
    pub target: ArtifactFlags,
    /// New display name
    #[arg(long = "name")]
    pub name: Option<String>,
    /// New description
    #[arg(long = "description")]
    pub description: Option<String>,
    #[command(flatten)]
    pub output: OutputFlags,
}

pub async fn run(args: MetadataArgs, factory: &mut Factory) -> Result<()> {
    let artifact = args
        .target
        .artifact_id(args.artifact_arg.as_deref())
        .ok_or(CliError::ArtifactRequired)?;
    let api = factory.registry(args.target.registry_id.as_deref())?;
    let group = resolve_group(args.target.group.as_deref());

    tracing::info!("Fetching artifact metadata");
    let mut metadata = api
        .get_artifact_metadata(&group, &artifact)
        .await
        .map_err(api_error)?;

    if args.name.is_some() || args.description.is_some() {
        let edit = EditableMetadata::from_current(&metadata, args.name, args.description);
        api.update_artifact_metadata(&group, &artifact, &edit)
            .await
            .map_err(api_error)?;
        tracing::info!("Artifact metadata updated");
        metadata = api
            .get_artifact_metadata(&group, &artifact)
            .await
            .map_err(api_error)?;
    }

    factory.render(&metadata, args.output.output)?;
    Ok(())
}
