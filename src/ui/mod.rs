//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//! - [`Table`] for rendering the alias table
//!
//! # Example
//!
//! ```
//! use pm::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_command("pnpm run build");
//! assert_eq!(ui.commands(), &["pnpm run build".to_string()]);
//! ```

pub mod mock;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, PmTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a message on standard output.
    fn message(&mut self, msg: &str);

    /// Display a warning on standard error.
    fn warning(&mut self, msg: &str);

    /// Display an error on standard error.
    fn error(&mut self, msg: &str);

    /// Announce the command about to be run.
    fn show_command(&mut self, command_line: &str);

    /// Display a rendered table on standard output.
    fn show_table(&mut self, table: &Table);
}
