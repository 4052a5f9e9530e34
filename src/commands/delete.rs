use crate::commands::ArtifactFlags;
use crate::factory::{api_error, Factory};
use crate::prompt::{confirm_destructive, require_confirmable, Confirmation};
use crate::resolve::resolve_group;
use anyhow::Result;
use clap::Args;

/// Without an artifact id every artifact in the group is deleted
#[derive(Args, Debug, Default)]
pub struct DeleteArgs {
    /// Id of the artifact
    #[arg(value_name = "ARTIFACT")]
    pub artifact_arg: Option<String>,
    #[command(flatten)]
    pub target: ArtifactFlags,
    /// Delete without prompt
    #[arg(short = 'y', long = "yes")]
    pub force: bool,
}

pub async fn run(args: DeleteArgs, factory: &mut Factory) -> Result<()> {
    require_confirmable(args.force, factory.prompter.as_ref())?;

    let artifact = args.target.artifact_id(args.artifact_arg.as_deref());
    let api = factory.registry(args.target.registry_id.as_deref())?;
    let group = resolve_group(args.target.group.as_deref());

    match artifact {
        None => {
            tracing::info!("Artifact was not specified. Command will delete all artifacts in the group");
            let message = format!("Do you want to delete ALL ARTIFACTS from group {group}");
            if confirm_destructive(args.force, factory.prompter.as_ref(), &message)?
                == Confirmation::Aborted
            {
                tracing::info!("Delete cancelled");
                return Ok(());
            }
            api.delete_artifacts_in_group(&group)
                .await
                .map_err(api_error)?;
            tracing::info!("Artifacts in group {group} deleted");
        }
        Some(artifact) => {
            tracing::info!("Deleting artifact {artifact}");
            let message = format!("Do you want to delete artifact {artifact} from group {group}");
            if confirm_destructive(args.force, factory.prompter.as_ref(), &message)?
                == Confirmation::Aborted
            {
                tracing::info!("Delete cancelled");
                return Ok(());
            }
            api.delete_artifact(&group, &artifact)
                .await
                .map_err(api_error)?;
            tracing::info!("Artifact deleted: {artifact}");
        }
    }

    Ok(())
}
