//! Forwarding a translated command to the package manager.

use std::path::{Path, PathBuf};

use crate::detection::PackageManager;
use crate::error::Result;
use crate::shell::{shell_command_line, CommandOptions, CommandRunner};
use crate::translate::ResolvedCommand;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Runs the resolved command with the detected package manager.
pub struct RunCommand<'a> {
    project_root: PathBuf,
    manager: PackageManager,
    resolved: ResolvedCommand,
    runner: &'a dyn CommandRunner,
}

impl<'a> RunCommand<'a> {
    pub fn new(
        project_root: &Path,
        manager: PackageManager,
        resolved: ResolvedCommand,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manager,
            resolved,
            runner,
        }
    }
}

impl Command for RunCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let program = self.manager.command();
        ui.show_command(&shell_command_line(program, &self.resolved.args));

        let options = CommandOptions {
            cwd: Some(self.project_root.clone()),
        };
        let status = self.runner.run(program, &self.resolved.args, &options)?;

        Ok(CommandResult::from_exit_code(status.propagated_code()))
    }
}
