//! The `--help` screen.

use clap::CommandFactory;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Prints usage, the command summary, and options.
#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }

    /// The rendered help text.
    pub fn text() -> String {
        Cli::command().render_help().to_string()
    }
}

impl Command for HelpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&Self::text());
        Ok(CommandResult::success())
    }
}
