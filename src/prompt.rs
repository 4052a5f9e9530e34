//! Yes/no confirmation before destructive actions.

use crate::error::CliError;
use dialoguer::Confirm;
use std::io::{self, IsTerminal};

/// Outcome of asking the user to confirm. Failures travel in the `Err` arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    /// The user said no; the command stops without reporting an error
    Aborted,
}

pub trait Prompter {
    /// Whether an interactive prompt can be shown at all
    fn can_prompt(&self) -> bool;
    fn confirm(&self, message: &str) -> Result<bool, CliError>;
}

/// Prompts on the attached terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn can_prompt(&self) -> bool {
        io::stdin().is_terminal() && io::stdout().is_terminal()
    }

    fn confirm(&self, message: &str) -> Result<bool, CliError> {
        Ok(Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?)
    }
}

/// Fail fast when `--yes` is missing and nobody can answer a prompt
pub fn require_confirmable(force: bool, prompter: &dyn Prompter) -> Result<(), CliError> {
    if force || prompter.can_prompt() {
        Ok(())
    } else {
        Err(CliError::ConfirmationRequiredNonInteractive { flag: "yes" })
    }
}

pub fn confirm_destructive(
    force: bool,
    prompter: &dyn Prompter,
    message: &str,
) -> Result<Confirmation, CliError> {
    if force {
        return Ok(Confirmation::Proceed);
    }
    require_confirmable(force, prompter)?;
    if prompter.confirm(message)? {
        Ok(Confirmation::Proceed)
    } else {
        Ok(Confirmation::Aborted)
    }
}
