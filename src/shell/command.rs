//! Shell command execution.

use crate::error::{PmError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Exit status of a finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
}

impl CommandStatus {
    /// A status with a known exit code.
    pub fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
        }
    }

    /// A status without an exit code.
    pub fn terminated() -> Self {
        Self { exit_code: None }
    }

    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// The code pm should exit with: the child's, or 0 if it had none.
    pub fn propagated_code(&self) -> i32 {
        self.exit_code.unwrap_or(0)
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,
}

/// Runs a program with arguments and waits for it to finish.
pub trait CommandRunner {
    /// Run `program` with `args`, inheriting stdio.
    fn run(
        &self,
        program: &str,
        args: &[String],
        options: &CommandOptions,
    ) -> Result<CommandStatus>;
}

/// Runs commands through the platform shell with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        options: &CommandOptions,
    ) -> Result<CommandStatus> {
        let command_line = shell_command_line(program, args);

        let mut cmd = Command::new(shell_program());
        cmd.arg(shell_flag());
        cmd.arg(&command_line);

        if let Some(cwd) = &options.cwd {
            cmd.current_dir(cwd);
        }

        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!("Spawning {:?} via {}", command_line, shell_program());

        let status = cmd.status().map_err(|e| PmError::Spawn {
            command: command_line.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!("'{}' exited with {:?}", command_line, status.code());
        Ok(CommandStatus {
            exit_code: status.code(),
        })
    }
}

/// Join a program and its arguments into the line handed to the shell.
///
/// Arguments are joined with single spaces and not quoted, so the shell
/// interprets them the same way it would if typed directly.
pub fn shell_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_program() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
