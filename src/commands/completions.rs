use crate::factory::Factory;
use crate::Cli;
use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs, factory: &mut Factory) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, factory.out.as_mut());
    Ok(())
}
