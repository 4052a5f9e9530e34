//! Turning raw flag values into the inputs of a registry call.

use crate::config::ConfigStore;
use crate::constants::{ALLOWED_ARTIFACT_TYPES, DEFAULT_ARTIFACT_GROUP};
use crate::error::CliError;
use std::fmt;
use std::str::FromStr;

/// Pick the registry instance a command talks to.
///
/// An explicit `--registryId` wins and the configuration is not read at all.
/// Otherwise the instance selected in the persisted configuration is used.
pub fn resolve_registry_id(
    explicit: Option<&str>,
    store: &dyn ConfigStore,
) -> Result<String, CliError> {
    if let Some(id) = explicit.map(str::trim).filter(|id| !id.is_empty()) {
        return Ok(id.to_string());
    }
    let cfg = store.load()?;
    if !cfg.has_registry_selected() {
        return Err(CliError::NoRegistrySelected);
    }
    Ok(cfg.selected_registry_id().unwrap_or_default().to_string())
}

/// Empty or missing groups fall back to [`DEFAULT_ARTIFACT_GROUP`]
pub fn resolve_group(group: Option<&str>) -> String {
    match group.map(str::trim).filter(|g| !g.is_empty()) {
        Some(g) => g.to_string(),
        None => {
            tracing::info!(
                "Group was not specified. Using '{}' artifacts group.",
                DEFAULT_ARTIFACT_GROUP
            );
            DEFAULT_ARTIFACT_GROUP.to_string()
        }
    }
}

/// Empty input means "let the registry detect the type"
pub fn validate_artifact_type(value: Option<&str>) -> Result<Option<ArtifactType>, CliError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.parse().map(Some),
        None => Ok(None),
    }
}

/// Artifact types understood by the registry, in [`ALLOWED_ARTIFACT_TYPES`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactType {
    Avro,
    Protobuf,
    Json,
    OpenApi,
    AsyncApi,
    GraphQl,
    KConnect,
    Wsdl,
    Xsd,
    Xml,
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 10] = [
        ArtifactType::Avro,
        ArtifactType::Protobuf,
        ArtifactType::Json,
        ArtifactType::OpenApi,
        ArtifactType::AsyncApi,
        ArtifactType::GraphQl,
        ArtifactType::KConnect,
        ArtifactType::Wsdl,
        ArtifactType::Xsd,
        ArtifactType::Xml,
    ];

    /// Value sent in the `X-Registry-ArtifactType` header
    pub fn as_str(&self) -> &'static str {
        ALLOWED_ARTIFACT_TYPES[*self as usize]
    }
}

impl FromStr for ArtifactType {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ArtifactType::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| CliError::InvalidArtifactType {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering format for structured responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(CliError::InvalidOutputFormat {
                value: other.to_string(),
            }),
        }
    }
}

/// clap value parser for `--output`
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: CliError| e.to_string())
}
