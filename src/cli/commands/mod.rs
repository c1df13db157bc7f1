//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. The
//! [`CommandDispatcher`] picks one from the parsed flags and arguments.

pub mod dispatcher;
pub mod help;
pub mod info;
pub mod run;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use help::HelpCommand;
pub use info::InfoCommand;
pub use run::RunCommand;
pub use version::VersionCommand;
