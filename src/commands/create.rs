use crate::commands::{ArtifactFlags, OutputFlags};
use crate::content::ContentSource;
use crate::factory::{api_error, Factory};
use crate::registry::CreateArtifactOptions;
use crate::resolve::{resolve_group, validate_artifact_type};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// File location of the artifact. Standard input is read when omitted
    #[arg(value_name = "FILE")]
    pub file_arg: Option<PathBuf>,
    /// File location of the artifact
    #[arg(short = 'f', long = "file", conflicts_with = "file_arg")]
    pub file: Option<PathBuf>,
    #[command(flatten)]
    pub target: ArtifactFlags,
    /// Type of artifact (AVRO, PROTOBUF, JSON, OPENAPI, ASYNCAPI, GRAPHQL, KCONNECT, WSDL, XSD, XML)
    #[arg(short = 't', long = "type")]
    pub artifact_type: Option<String>,
    /// Force specific version of the artifact
    #[arg(long = "version")]
    pub version: Option<String>,
    #[command(flatten)]
    pub output: OutputFlags,
}

pub async fn run(args: CreateArgs, factory: &mut Factory) -> Result<()> {
    let artifact_type = validate_artifact_type(args.artifact_type.as_deref())?;
    let api = factory.registry(args.target.registry_id.as_deref())?;
    let group = resolve_group(args.target.group.as_deref());

    let file = args.file_arg.or(args.file);
    let content = ContentSource::resolve(file.as_deref())?;

    let options = CreateArtifactOptions {
        artifact_type,
        artifact_id: args.target.artifact_id(None),
        version: args.version.filter(|v| !v.trim().is_empty()),
    };
    let metadata = api
        .create_artifact(&group, content, options)
        .await
        .map_err(api_error)?;
    tracing::info!("Artifact created");

    factory.render(&metadata, args.output.output)?;
    Ok(())
}
