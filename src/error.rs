//! Error types for the artifact commands
//!
//! Commands return `anyhow::Result`, but every failure the user can trigger
//! is raised as a [`CliError`] so that callers can match on it with
//! `downcast_ref`.

use crate::constants::allowed_artifact_types_as_string;
use crate::model::ApiErrorBody;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by the registry REST client
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request to registry failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response carrying the registry's error document
    #[error("registry responded with status {status}: {}", .body.message)]
    Model { status: u16, body: ApiErrorBody },

    /// Non-2xx response whose body could not be decoded
    #[error("registry responded with status {status}: {body}")]
    Status { status: u16, body: String },
}

impl ApiError {
    /// Build an error from a failed response body, keeping the decoded error
    /// document when the registry sent one
    pub fn from_response(status: u16, raw: &[u8]) -> Self {
        match serde_json::from_slice::<ApiErrorBody>(raw) {
            Ok(body) => ApiError::Model { status, body },
            Err(_) => ApiError::Status {
                status,
                body: String::from_utf8_lossy(raw).trim().to_string(),
            },
        }
    }
}

/// Errors surfaced by the artifact commands
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to load configuration from {}: {source}", .path.display())]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to save configuration to {}: {source}", .path.display())]
    ConfigSave {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(
        "No service Registry selected. Use 'apicurio-artifacts use <registry-id>' to select your registry or pass --registryId"
    )]
    NoRegistrySelected,

    #[error("registry '{id}' is not configured. Known registries: {known}")]
    UnknownRegistry { id: String, known: String },

    #[error("cannot connect to registry '{registry}': {reason}")]
    Connection { registry: String, reason: String },

    #[error("Invalid artifact type '{value}'. Allowed values: {}", allowed_artifact_types_as_string())]
    InvalidArtifactType { value: String },

    #[error("invalid value '{value}' for --output, valid options are: json, yaml, yml")]
    InvalidOutputFormat { value: String },

    #[error("--{flag} flag is required when not running interactively")]
    ConfirmationRequiredNonInteractive { flag: &'static str },

    #[error("Artifact is required. Please specify artifact as positional argument or by using --artifact flag")]
    ArtifactRequired,

    #[error("exactly one of --global-id, --content-id or --hash must be provided")]
    InvalidDownloadSelector,

    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read artifact content from standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("confirmation prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// An [`ApiError::Model`] rewritten into the user-facing form
    #[error("{0}")]
    ApiMessage(String),

    #[error("failed to serialize output: {0}")]
    Serialization(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(Box::new(err))
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Serialization(Box::new(err))
    }
}

/// Pull the registry's error document out of an error, if it carries one
pub fn get_api_error(err: &CliError) -> Option<&ApiErrorBody> {
    match err {
        CliError::Api(ApiError::Model { body, .. }) => Some(body),
        _ => None,
    }
}

/// Rewrite registry errors as `Error: <message> Detail <detail>`.
///
/// Best effort only: anything that does not carry a decoded error document is
/// returned unchanged.
pub fn transform_error(err: CliError) -> CliError {
    match get_api_error(&err) {
        Some(body) => CliError::ApiMessage(format!(
            "Error: {} Detail {}",
            body.message, body.detail
        )),
        None => err,
    }
}
