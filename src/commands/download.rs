use crate::error::CliError;
use crate::factory::{api_error, Factory};
use crate::registry::ContentRef;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct DownloadArgs {
    /// File the content is written to. Printed to standard output when omitted
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file_arg: Option<PathBuf>,
    /// Global id of the artifact version
    #[arg(long = "global-id")]
    pub global_id: Option<i64>,
    /// Id of the content
    #[arg(long = "content-id")]
    pub content_id: Option<i64>,
    /// SHA-256 hash of the content
    #[arg(long = "hash")]
    pub hash: Option<String>,
    /// Id of the registry to be used. By default uses currently selected registry
    #[arg(long = "registryId")]
    pub registry_id: Option<String>,
    /// File the content is written to
    #[arg(long = "outputFile", conflicts_with = "output_file_arg")]
    pub output_file: Option<PathBuf>,
}

impl DownloadArgs {
    /// Exactly one selector must be set
    pub fn content_ref(&self) -> Result<ContentRef, CliError> {
        let hash = self.hash.as_deref().map(str::trim).filter(|h| !h.is_empty());
        match (self.global_id, self.content_id, hash) {
            (Some(id), None, None) => Ok(ContentRef::GlobalId(id)),
            (None, Some(id), None) => Ok(ContentRef::ContentId(id)),
            (None, None, Some(h)) => Ok(ContentRef::Hash(h.to_string())),
            _ => Err(CliError::InvalidDownloadSelector),
        }
    }
}

pub async fn run(args: DownloadArgs, factory: &mut Factory) -> Result<()> {
    let reference = args.content_ref()?;
    let api = factory.registry(args.registry_id.as_deref())?;

    tracing::info!("Downloading artifact content");
    let content = api.get_content(&reference).await.map_err(api_error)?;

    let output_file = args.output_file_arg.or(args.output_file);
    factory.write_content(&content, output_file.as_deref())?;
    tracing::info!("Successfully downloaded artifact content");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_selector_is_required() {
        let none = DownloadArgs::default();
        assert!(matches!(
            none.content_ref(),
            Err(CliError::InvalidDownloadSelector)
        ));

        let both = DownloadArgs {
            global_id: Some(1),
            hash: Some("abc".into()),
            ..Default::default()
        };
        assert!(matches!(
            both.content_ref(),
            Err(CliError::InvalidDownloadSelector)
        ));

        let global = DownloadArgs {
            global_id: Some(12),
            ..Default::default()
        };
        assert_eq!(global.content_ref().unwrap(), ContentRef::GlobalId(12));
    }
}
