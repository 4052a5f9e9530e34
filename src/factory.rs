//! Collaborators shared by every command invocation.

use crate::config::{ConfigStore, FileConfigStore};
use crate::error::{transform_error, ApiError, CliError};
use crate::prompt::{Prompter, TerminalPrompter};
use crate::registry::{Connector, HttpConnector, RegistryApi};
use crate::render;
use crate::resolve::{resolve_registry_id, OutputFormat};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// Everything a command needs besides its own flags
pub struct Factory {
    pub config: Box<dyn ConfigStore>,
    pub connector: Box<dyn Connector>,
    pub prompter: Box<dyn Prompter>,
    pub out: Box<dyn Write>,
}

impl Factory {
    /// Real configuration file, HTTP connector, terminal prompt and stdout
    pub fn from_env() -> Self {
        Factory {
            config: Box::new(FileConfigStore::from_env()),
            connector: Box::new(HttpConnector::from_env()),
            prompter: Box::new(TerminalPrompter),
            out: Box::new(io::stdout()),
        }
    }

    /// Resolve the target registry and open a client for it
    pub fn registry(&self, explicit_id: Option<&str>) -> Result<Box<dyn RegistryApi>, CliError> {
        let id = resolve_registry_id(explicit_id, self.config.as_ref())?;
        tracing::debug!("using registry '{id}'");
        self.connector.connect(&id)
    }

    pub fn render<T: Serialize + ?Sized>(
        &mut self,
        value: &T,
        format: OutputFormat,
    ) -> Result<(), CliError> {
        render::render(value, format, self.out.as_mut())
    }

    pub fn write_content(
        &mut self,
        content: &[u8],
        output_file: Option<&Path>,
    ) -> Result<(), CliError> {
        render::write_content(content, output_file, self.out.as_mut())
    }
}

/// Map a failed registry call to the user-facing error
pub fn api_error(err: ApiError) -> CliError {
    transform_error(CliError::Api(err))
}
