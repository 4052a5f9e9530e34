use crate::factory::Factory;
use crate::resolve::{parse_output_format, OutputFormat};
use anyhow::Result;
use clap::{Args, Subcommand};

pub mod completions;
pub mod create;
pub mod delete;
pub mod download;
pub mod get;
pub mod list;
pub mod metadata;
pub mod registry;
pub mod update;
pub mod use_registry;
pub mod versions;

/// Flags locating an artifact, shared by most commands
#[derive(Args, Debug, Clone, Default)]
pub struct ArtifactFlags {
    /// Id of the artifact
    #[arg(short = 'a', long = "artifact")]
    pub artifact: Option<String>,
    /// Group of the artifact ('default' when omitted)
    #[arg(short = 'g', long = "group")]
    pub group: Option<String>,
    /// Id of the registry to be used. By default uses currently selected registry
    #[arg(long = "registryId")]
    pub registry_id: Option<String>,
}

impl ArtifactFlags {
    /// Positional artifact id overrides `--artifact`
    pub fn artifact_id(&self, positional: Option<&str>) -> Option<String> {
        positional
            .or(self.artifact.as_deref())
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
    }
}

/// `--output` flag for commands that print structured results
#[derive(Args, Debug, Clone, Default)]
pub struct OutputFlags {
    /// Output format (json, yaml, yml)
    #[arg(short = 'o', long = "output", default_value = "json", value_parser = parse_output_format)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Create a new artifact from a file or standard input")]
    Create(create::CreateArgs),
    #[command(about = "Get the latest (or a specific) version of an artifact by id and group")]
    Get(get::GetArgs),
    #[command(about = "Update an artifact from a file or standard input, creating a new version")]
    Update(update::UpdateArgs),
    #[command(about = "Delete an artifact, or every artifact in a group")]
    Delete(delete::DeleteArgs),
    #[command(about = "List artifacts in a group")]
    List(list::ListArgs),
    #[command(about = "List the versions of an artifact")]
    Versions(versions::VersionsArgs),
    #[command(about = "Show or edit artifact metadata")]
    Metadata(metadata::MetadataArgs),
    #[command(about = "Download artifact content by global id, content id or content hash")]
    Download(download::DownloadArgs),
    #[command(about = "Select the registry instance used when --registryId is omitted")]
    Use(use_registry::UseArgs),
    #[command(about = "Subcommand: manage configured registry instances (add/list/remove)")]
    Registry {
        #[command(subcommand)]
        cmd: registry::RegistryCommands,
    },
    #[command(about = "Emit shell completion scripts (bash/zsh/fish)")]
    Completions(completions::CompletionsArgs),
}

pub async fn run(cmd: Commands, factory: &mut Factory) -> Result<()> {
    match cmd {
        Commands::Create(args) => create::run(args, factory).await,
        Commands::Get(args) => get::run(args, factory).await,
        Commands::Update(args) => update::run(args, factory).await,
        Commands::Delete(args) => delete::run(args, factory).await,
        Commands::List(args) => list::run(args, factory).await,
        Commands::Versions(args) => versions::run(args, factory).await,
        Commands::Metadata(args) => metadata::run(args, factory).await,
        Commands::Download(args) => download::run(args, factory).await,
        Commands::Use(args) => use_registry::run(args, factory),
        Commands::Registry { cmd } => registry::run(cmd, factory),
        Commands::Completions(args) => completions::run(args, factory),
    }
}
