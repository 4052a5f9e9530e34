use crate::error::CliError;
use crate::factory::Factory;
use anyhow::Result;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
pub struct UseArgs {
    /// Id of a configured registry instance
    pub registry_id: String,
}

pub fn run(args: UseArgs, factory: &mut Factory) -> Result<()> {
    let mut cfg = factory.config.load_raw()?;
    if cfg.find_registry(&args.registry_id).is_none() {
        return Err(CliError::UnknownRegistry {
            id: args.registry_id,
            known: cfg.registry_ids(),
        }
        .into());
    }
    cfg.selected_registry = Some(args.registry_id.clone());
    factory.config.save(&cfg)?;
    writeln!(factory.out, "✅ Registry '{}' selected", args.registry_id)?;
    Ok(())
}
