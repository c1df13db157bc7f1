//! Recording command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything. It
//! records every invocation and returns a pre-configured status, or a spawn
//! error when built with [`MockRunner::failing`].
//!
//! # Example
//!
//! ```
//! use pm::shell::{CommandOptions, CommandRunner, CommandStatus, MockRunner};
//!
//! let runner = MockRunner::with_status(CommandStatus::exited(2));
//! let status = runner
//!     .run("yarn", &["install".to_string()], &CommandOptions::default())
//!     .unwrap();
//!
//! assert_eq!(status.exit_code, Some(2));
//! assert_eq!(runner.commands()[0].program, "yarn");
//! ```

use std::cell::RefCell;
use std::path::PathBuf;

use crate::error::{PmError, Result};

use super::{shell_command_line, CommandOptions, CommandRunner, CommandStatus};

/// A command captured by [`MockRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

#[derive(Debug, Clone)]
enum Outcome {
    Status(CommandStatus),
    SpawnError(String),
}

/// Command runner that records invocations instead of spawning them.
#[derive(Debug)]
pub struct MockRunner {
    outcome: Outcome,
    commands: RefCell<Vec<RecordedCommand>>,
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::with_status(CommandStatus::exited(0))
    }
}

impl MockRunner {
    /// Create a runner whose commands all exit 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner whose commands all finish with `status`.
    pub fn with_status(status: CommandStatus) -> Self {
        Self {
            outcome: Outcome::Status(status),
            commands: RefCell::new(Vec::new()),
        }
    }

    /// Create a runner that records commands but fails to spawn them.
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Outcome::SpawnError(message.to_string()),
            commands: RefCell::new(Vec::new()),
        }
    }

    /// All recorded commands, oldest first.
    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.commands.borrow().clone()
    }

    /// Whether nothing has been run.
    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }
}

impl CommandRunner for MockRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        options: &CommandOptions,
    ) -> Result<CommandStatus> {
        self.commands.borrow_mut().push(RecordedCommand {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: options.cwd.clone(),
        });
        match &self.outcome {
            Outcome::Status(status) => Ok(*status),
            Outcome::SpawnError(message) => Err(PmError::Spawn {
                command: shell_command_line(program, args),
                message: message.clone(),
            }),
        }
    }
}
