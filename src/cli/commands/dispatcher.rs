//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the parsed CLI to a command

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::config::{AliasTable, InstallPaths};
use crate::detection::PackageManagerDetector;
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::translate::translate;
use crate::ui::UserInterface;

use super::{HelpCommand, InfoCommand, RunCommand, VersionCommand};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// The code to hand to the operating system.
    ///
    /// Codes outside `0..=255` cannot be represented and are reported as 1,
    /// so a failing child never turns into a success.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }

    /// Create a result mirroring a child exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// Dispatches the parsed CLI to a command implementation.
pub struct CommandDispatcher {
    project_root: PathBuf,
    paths: InstallPaths,
}

impl CommandDispatcher {
    /// Create a dispatcher for a project directory and install location.
    pub fn new(project_root: PathBuf, paths: InstallPaths) -> Self {
        Self {
            project_root,
            paths,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Help and version are handled before anything is detected. Otherwise
    /// the package manager is detected, aliases are loaded, and either the
    /// info screen is shown (no arguments) or the translated command is run.
    pub fn dispatch(
        &self,
        cli: &Cli,
        ui: &mut dyn UserInterface,
        runner: &dyn CommandRunner,
    ) -> Result<CommandResult> {
        if cli.help {
            return HelpCommand::new().execute(ui);
        }
        if cli.version {
            return VersionCommand::new(self.paths.manifest_file()).execute(ui);
        }

        let manager = PackageManagerDetector::detect(&self.project_root);
        let aliases = self.load_aliases(ui);

        match translate(&cli.args, &aliases) {
            None => InfoCommand::new(manager, aliases).execute(ui),
            Some(resolved) => {
                RunCommand::new(&self.project_root, manager, resolved, runner).execute(ui)
            }
        }
    }

    /// Load the alias table, downgrading a malformed file to a warning.
    fn load_aliases(&self, ui: &mut dyn UserInterface) -> AliasTable {
        let path = self.paths.alias_file();
        match AliasTable::load(&path) {
            Ok(aliases) => aliases,
            Err(e) => {
                tracing::debug!("Ignoring alias file: {}", e);
                ui.warning(&format!("{}, ignoring...", e));
                AliasTable::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PmError;
    use crate::shell::{CommandStatus, MockRunner};
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        project: TempDir,
        home: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                project: TempDir::new().unwrap(),
                home: TempDir::new().unwrap(),
            }
        }

        fn with_project_file(self, name: &str, content: &str) -> Self {
            fs::write(self.project.path().join(name), content).unwrap();
            self
        }

        fn with_aliases(self, content: &str) -> Self {
            fs::write(self.home.path().join("alias.json"), content).unwrap();
            self
        }

        fn dispatcher(&self) -> CommandDispatcher {
            CommandDispatcher::new(
                self.project.path().to_path_buf(),
                InstallPaths::new(self.home.path()),
            )
        }

        fn dispatch(&self, argv: &[&str], runner: &MockRunner) -> (CommandResult, MockUI) {
            let cli = Cli::parse_from(std::iter::once("pm").chain(argv.iter().copied()));
            let mut ui = MockUI::new();
            let result = self.dispatcher().dispatch(&cli, &mut ui, runner).unwrap();
            (result, ui)
        }
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_from_exit_code() {
        assert_eq!(CommandResult::from_exit_code(0), CommandResult::success());
        assert_eq!(CommandResult::from_exit_code(3), CommandResult::failure(3));
    }

    #[test]
    fn process_exit_code_fits_u8() {
        assert_eq!(CommandResult::success().process_exit_code(), 0);
        assert_eq!(CommandResult::failure(1).process_exit_code(), 1);
        assert_eq!(CommandResult::failure(255).process_exit_code(), 255);
        assert_eq!(CommandResult::failure(256).process_exit_code(), 1);
        assert_eq!(CommandResult::failure(-1).process_exit_code(), 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher =
            CommandDispatcher::new(PathBuf::from("/test"), InstallPaths::new("/opt/pm"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn no_arguments_shows_info_without_spawning() {
        let fixture = Fixture::new()
            .with_project_file("yarn.lock", "")
            .with_aliases(r#"{"b": "build --watch"}"#);
        let runner = MockRunner::new();

        let (result, ui) = fixture.dispatch(&[], &runner);

        assert_eq!(result.exit_code, 1);
        assert!(runner.is_empty());
        assert!(ui.messages().contains(&"Package Manager: yarn".to_string()));
        assert!(ui.tables()[0].contains("build --watch"));
    }

    #[test]
    fn alias_runs_expanded_command() {
        let fixture = Fixture::new()
            .with_project_file("pnpm-lock.yaml", "")
            .with_aliases(r#"{"b": "build --watch"}"#);
        let runner = MockRunner::new();

        let (result, ui) = fixture.dispatch(&["b"], &runner);

        assert!(result.success);
        let commands = runner.commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].program, "pnpm");
        assert_eq!(commands[0].args, vec!["run", "build", "--watch"]);
        assert_eq!(commands[0].cwd.as_deref(), Some(fixture.project.path()));
        assert_eq!(ui.commands(), &["pnpm run build --watch".to_string()]);
    }

    #[test]
    fn install_shorthand() {
        let fixture = Fixture::new().with_project_file("bun.lockb", "");
        let runner = MockRunner::new();

        fixture.dispatch(&["i"], &runner);

        let commands = runner.commands();
        assert_eq!(commands[0].program, "bun");
        assert_eq!(commands[0].args, vec!["install"]);
    }

    #[test]
    fn script_passthrough_uses_manifest_field() {
        let fixture =
            Fixture::new().with_project_file("package.json", r#"{"packageManager":"pnpm@8.6.0"}"#);
        let runner = MockRunner::new();

        fixture.dispatch(&["test", "--coverage"], &runner);

        let commands = runner.commands();
        assert_eq!(commands[0].program, "pnpm");
        assert_eq!(commands[0].args, vec!["run", "test", "--coverage"]);
    }

    #[test]
    fn child_exit_code_is_propagated() {
        let fixture = Fixture::new();
        let runner = MockRunner::with_status(CommandStatus::exited(42));

        let (result, _) = fixture.dispatch(&["lint"], &runner);

        assert!(!result.success);
        assert_eq!(result.exit_code, 42);
    }

    #[test]
    fn signal_termination_exits_zero() {
        let fixture = Fixture::new();
        let runner = MockRunner::with_status(CommandStatus::terminated());

        let (result, _) = fixture.dispatch(&["dev"], &runner);

        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn spawn_failure_is_an_error_after_announcing() {
        let fixture = Fixture::new();
        let runner = MockRunner::failing("boom");
        let cli = Cli::parse_from(["pm", "build"]);
        let mut ui = MockUI::new();

        let err = fixture
            .dispatcher()
            .dispatch(&cli, &mut ui, &runner)
            .unwrap_err();

        assert!(matches!(&err, PmError::Spawn { .. }));
        assert_eq!(err.to_string(), "Failed to spawn 'npm run build': boom");
        assert_eq!(ui.commands(), &["npm run build".to_string()]);
        assert_eq!(runner.commands().len(), 1);
    }

    #[test]
    fn malformed_aliases_warn_and_continue() {
        let fixture = Fixture::new().with_aliases("{ not json");
        let runner = MockRunner::new();

        let (result, ui) = fixture.dispatch(&["b"], &runner);

        assert!(result.success);
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.warnings()[0].contains("alias.json"));
        assert_eq!(runner.commands()[0].args, vec!["run", "b"]);
    }

    #[test]
    fn missing_aliases_are_silent() {
        let fixture = Fixture::new();
        let runner = MockRunner::new();

        let (_, ui) = fixture.dispatch(&["build"], &runner);

        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn help_takes_priority_and_skips_detection() {
        let fixture = Fixture::new().with_aliases("{ not json");
        let runner = MockRunner::new();

        let (result, ui) = fixture.dispatch(&["--help"], &runner);

        assert!(result.success);
        assert!(runner.is_empty());
        assert!(ui.warnings().is_empty());
        assert!(ui.messages()[0].contains("Usage:"));
    }

    #[test]
    fn version_reads_install_manifest() {
        let fixture = Fixture::new();
        fs::write(
            fixture.home.path().join("package.json"),
            r#"{"version":"1.4.0"}"#,
        )
        .unwrap();
        let runner = MockRunner::new();

        let (result, ui) = fixture.dispatch(&["-v"], &runner);

        assert!(result.success);
        assert!(runner.is_empty());
        assert_eq!(ui.messages(), &["V1.4.0".to_string()]);
    }
}
