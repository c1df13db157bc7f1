//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use pm::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Package Manager: npm");
//! ui.warning("Could not parse alias.json");
//!
//! assert!(ui.messages().contains(&"Package Manager: npm".to_string()));
//! assert_eq!(ui.warnings().len(), 1);
//! ```

use super::{Table, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    commands: Vec<String>,
    tables: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all announced command lines.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all rendered tables.
    pub fn tables(&self) -> &[String] {
        &self.tables
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_command(&mut self, command_line: &str) {
        self.commands.push(command_line.to_string());
    }

    fn show_table(&mut self, table: &Table) {
        self.tables.push(table.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_kind_separately() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.warning("careful");
        ui.error("broken");
        ui.show_command("npm install");

        assert_eq!(ui.messages(), &["hello".to_string()]);
        assert_eq!(ui.warnings(), &["careful".to_string()]);
        assert_eq!(ui.errors(), &["broken".to_string()]);
        assert_eq!(ui.commands(), &["npm install".to_string()]);
    }

    #[test]
    fn captures_rendered_tables() {
        let mut ui = MockUI::new();
        let mut table = Table::new(vec!["Alias", "Command"]);
        table.add_row(vec!["b", "build"]);
        ui.show_table(&table);

        assert_eq!(ui.tables().len(), 1);
        assert!(ui.tables()[0].contains("build"));
    }
}
