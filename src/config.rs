//! Persisted CLI configuration
//!
//! The configuration file lists the registry instances the CLI knows about and
//! records which one is currently selected. It lives at
//! `$APICURIO_ARTIFACTS_CONFIG` or `~/.config/apicurio/artifacts.yaml`.
//!
//! ## Environment Variable Expansion
//!
//! The file supports environment variable expansion before it is parsed:
//! - `${VAR}` - Simple substitution
//! - `${VAR:-default}` - Use default if VAR is unset or empty
//! - `${VAR-default}` - Use default if VAR is unset
//! - `${VAR:+alt}` - Use alt if VAR is set and non-empty
//! - `${VAR+alt}` - Use alt if VAR is set

use crate::constants::{CONFIG_FILE, CONFIG_PATH_ENV};
use crate::error::CliError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::{env, fs, path::PathBuf};

/// CLI configuration
///
/// # Example
///
/// ```yaml
/// registries:
///   - id: dev
///     url: https://registry.example.com/apis/registry/v2
///     auth:
///       type: bearer
///       tokenEnv: REGISTRY_TOKEN
/// selectedRegistry: dev
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Known registry instances
    #[serde(default)]
    pub registries: Vec<RegistryInstanceConfig>,
    /// Id of the instance used when `--registryId` is not passed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_registry: Option<String>,
}

/// A registry instance the CLI can talk to
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryInstanceConfig {
    /// Identifier used by `--registryId` and `use`
    pub id: String,
    /// Base URL of the core REST API, e.g. `https://host/apis/registry/v2`
    pub url: String,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Authentication configuration for registry access
///
/// Credentials are always sourced from environment variables.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
#[serde(tag = "type")]
pub enum AuthConfig {
    /// No authentication (anonymous access)
    #[default]
    None,
    /// HTTP Basic authentication
    Basic {
        username: String,
        /// Environment variable containing the password
        password_env: String,
    },
    /// Raw token sent as the Authorization header
    Token { token_env: String },
    /// Bearer token authentication
    Bearer { token_env: String },
}

impl Config {
    pub fn has_registry_selected(&self) -> bool {
        self.selected_registry_id().is_some()
    }

    /// Selected instance id, or `None` when nothing usable is selected
    pub fn selected_registry_id(&self) -> Option<&str> {
        self.selected_registry
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    pub fn find_registry(&self, id: &str) -> Option<&RegistryInstanceConfig> {
        self.registries.iter().find(|r| r.id == id)
    }

    /// Comma separated ids, for error messages
    pub fn registry_ids(&self) -> String {
        if self.registries.is_empty() {
            return "(none)".to_string();
        }
        self.registries
            .iter()
            .map(|r| r.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Access to the persisted configuration
pub trait ConfigStore {
    fn load(&self) -> Result<Config, CliError>;

    /// Configuration exactly as written, placeholders left unexpanded.
    /// Load-modify-save cycles must start from this.
    fn load_raw(&self) -> Result<Config, CliError> {
        self.load()
    }

    fn save(&self, cfg: &Config) -> Result<(), CliError>;
}

/// [`ConfigStore`] backed by a YAML file on disk
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileConfigStore { path: path.into() }
    }

    /// Store at `$APICURIO_ARTIFACTS_CONFIG`, falling back to the user config dir
    pub fn from_env() -> Self {
        Self::new(default_config_path())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read(&self, expand: bool) -> Result<Config, CliError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| CliError::ConfigLoad {
            path: self.path.clone(),
            source: Box::new(e),
        })?;
        let text = if expand {
            expand_env_placeholders(&raw)
        } else {
            raw
        };
        serde_yaml::from_str(&text).map_err(|e| CliError::ConfigLoad {
            path: self.path.clone(),
            source: Box::new(e),
        })
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Config, CliError> {
        self.read(true)
    }

    fn load_raw(&self) -> Result<Config, CliError> {
        self.read(false)
    }

    fn save(&self, cfg: &Config) -> Result<(), CliError> {
        let save_err = |e: Box<dyn std::error::Error + Send + Sync>| CliError::ConfigSave {
            path: self.path.clone(),
            source: e,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| save_err(Box::new(e)))?;
        }
        let data = serde_yaml::to_string(cfg).map_err(|e| save_err(Box::new(e)))?;
        fs::write(&self.path, data).map_err(|e| save_err(Box::new(e)))?;
        tracing::debug!("saved configuration to {}", self.path.display());
        Ok(())
    }
}

pub fn default_config_path() -> PathBuf {
    env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
            p.push(CONFIG_FILE);
            p
        })
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?:(:?[-+])([^}]*))?\}")
            .expect("placeholder pattern is valid")
    })
}

pub fn expand_env_placeholders(input: &str) -> String {
    placeholder_regex()
        .replace_all(input, |caps: &regex::Captures| {
            let var = env::var(&caps[1]).ok();
            let op = caps.get(2).map_or("", |m| m.as_str());
            let val = caps.get(3).map_or("", |m| m.as_str());

            match (var.as_deref(), op) {
                (Some(v), "") => v.to_string(),                     // ${VAR}
                (Some(v), ":-") if !v.is_empty() => v.to_string(), // ${VAR:-default}
                (_, ":-") => val.to_string(),
                (Some(v), "-") => v.to_string(), // ${VAR-default}
                (None, "-") => val.to_string(),
                (Some(v), ":+") if !v.is_empty() => val.to_string(), // ${VAR:+alt}
                (Some(_), "+") => val.to_string(),                   // ${VAR+alt}
                _ => String::new(),
            }
        })
        .to_string()
}
