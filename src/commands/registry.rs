use crate::config::{AuthConfig, RegistryInstanceConfig};
use crate::factory::Factory;
use anyhow::{anyhow, Result};
use clap::{Subcommand, ValueEnum};
use dialoguer::{Input, Select};
use std::io::Write;

#[derive(Subcommand, Debug)]
pub enum RegistryCommands {
    /// List configured registry instances
    List,
    /// Add a registry instance
    Add(AddArgs),
    /// Remove a registry instance by id
    Remove { id: String },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AuthKind {
    None,
    Basic,
    Token,
    Bearer,
}

#[derive(clap::Args, Debug, Default)]
pub struct AddArgs {
    /// Id used with --registryId and `use`
    pub id: String,
    /// Base URL of the registry API, e.g. https://host/apis/registry/v2
    pub url: String,
    /// Authentication type (prompted for when omitted on a terminal)
    #[arg(long = "auth", value_enum)]
    pub auth: Option<AuthKind>,
    /// Username for basic auth
    #[arg(long = "username")]
    pub username: Option<String>,
    /// Environment variable holding the basic auth password
    #[arg(long = "password-env")]
    pub password_env: Option<String>,
    /// Environment variable holding the token
    #[arg(long = "token-env")]
    pub token_env: Option<String>,
    /// Select the new registry right away
    #[arg(long = "use")]
    pub select: bool,
}

/// Use `value` when given, otherwise ask on the terminal, otherwise fail
fn value_or_prompt(value: Option<String>, msg: &str, factory: &Factory) -> Result<String> {
    if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
        return Ok(v);
    }
    if !factory.prompter.can_prompt() {
        return Err(anyhow!("{} is required when not running interactively", msg));
    }
    let val: String = Input::new().with_prompt(msg).interact_text()?;
    if val.trim().is_empty() {
        Err(anyhow!("{} cannot be empty", msg))
    } else {
        Ok(val.trim().to_string())
    }
}

fn auth_from_args(args: &mut AddArgs, factory: &Factory) -> Result<AuthConfig> {
    let kind = match args.auth {
        Some(kind) => kind,
        None if factory.prompter.can_prompt() => {
            let auth_options = ["none", "basic", "token", "bearer"];
            let selection = Select::new()
                .with_prompt("Auth type")
                .items(&auth_options)
                .default(0)
                .interact()?;
            AuthKind::value_variants()[selection]
        }
        None => AuthKind::None,
    };

    Ok(match kind {
        AuthKind::None => AuthConfig::None,
        AuthKind::Basic => AuthConfig::Basic {
            username: value_or_prompt(args.username.take(), "Username", factory)?,
            password_env: value_or_prompt(args.password_env.take(), "Password env var", factory)?,
        },
        AuthKind::Token => AuthConfig::Token {
            token_env: value_or_prompt(args.token_env.take(), "Token env var", factory)?,
        },
        AuthKind::Bearer => AuthConfig::Bearer {
            token_env: value_or_prompt(args.token_env.take(), "Bearer-token env var", factory)?,
        },
    })
}

pub fn run(cmd: RegistryCommands, factory: &mut Factory) -> Result<()> {
    let mut cfg = factory.config.load_raw()?;

    match cmd {
        RegistryCommands::List => {
            if cfg.registries.is_empty() {
                writeln!(factory.out, "(no registries configured)")?;
            } else {
                for r in &cfg.registries {
                    let marker = if cfg.selected_registry_id() == Some(r.id.as_str()) {
                        "*"
                    } else {
                        "-"
                    };
                    writeln!(factory.out, " {} {} → {} (auth={:?})", marker, r.id, r.url, r.auth)?;
                }
            }
        }
        RegistryCommands::Add(mut args) => {
            if cfg.find_registry(&args.id).is_some() {
                return Err(anyhow!("registry '{}' already exists", args.id));
            }
            let auth = auth_from_args(&mut args, factory)?;
            cfg.registries.push(RegistryInstanceConfig {
                id: args.id.clone(),
                url: args.url,
                auth,
            });
            if args.select || cfg.registries.len() == 1 {
                cfg.selected_registry = Some(args.id.clone());
            }
            factory.config.save(&cfg)?;
            writeln!(factory.out, "✅ Added registry '{}' successfully", args.id)?;
        }
        RegistryCommands::Remove { id } => {
            let before = cfg.registries.len();
            cfg.registries.retain(|r| r.id != id);
            if cfg.registries.len() == before {
                writeln!(factory.out, "no such registry '{id}'")?;
            } else {
                if cfg.selected_registry.as_deref() == Some(id.as_str()) {
                    cfg.selected_registry = None;
                }
                factory.config.save(&cfg)?;
                writeln!(factory.out, "removed '{id}'")?;
            }
        }
    }

    Ok(())
}
