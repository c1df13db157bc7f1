//! Shell command execution.

pub mod command;
pub mod mock;

pub use command::{shell_command_line, CommandOptions, CommandRunner, CommandStatus, ShellRunner};
pub use mock::{MockRunner, RecordedCommand};
