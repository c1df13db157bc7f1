//! The `--version` output.

use std::path::PathBuf;

use crate::config::read_version;
use crate::error::Result;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Prints the version prefixed with `V`.
#[derive(Debug)]
pub struct VersionCommand {
    manifest_path: PathBuf,
}

impl VersionCommand {
    /// Report the version recorded in the manifest at `manifest_path`.
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }
}

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!("V{}", read_version(&self.manifest_path)));
        Ok(CommandResult::success())
    }
}
