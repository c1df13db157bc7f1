//! Output when pm is run without a command.

use crate::config::AliasTable;
use crate::detection::PackageManager;
use crate::error::Result;
use crate::ui::{PmTheme, Table, UserInterface};

use super::{Command, CommandResult};

/// Shows the detected package manager and the alias table, then exits 1.
#[derive(Debug)]
pub struct InfoCommand {
    manager: PackageManager,
    aliases: AliasTable,
}

impl InfoCommand {
    pub fn new(manager: PackageManager, aliases: AliasTable) -> Self {
        Self { manager, aliases }
    }

    /// The alias table as a two-column table.
    pub fn alias_table(&self) -> Table {
        let mut table =
            Table::new(vec!["Alias", "Command"]).with_border_style(PmTheme::new().border);
        for (name, command) in self.aliases.iter() {
            table.add_row(vec![name, command]);
        }
        table
    }
}

impl Command for InfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!("Package Manager: {}", self.manager));
        ui.show_table(&self.alias_table());
        Ok(CommandResult::failure(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_manager_and_aliases() {
        let aliases: AliasTable = [("b", "build --watch"), ("t", "test")]
            .into_iter()
            .collect();
        let mut ui = MockUI::new();

        let result = InfoCommand::new(PackageManager::Bun, aliases)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.messages(), &["Package Manager: bun".to_string()]);
        let table = console::strip_ansi_codes(&ui.tables()[0]).to_string();
        assert!(table.contains("build --watch"));
        assert!(table.contains("test"));
    }

    #[test]
    fn empty_aliases_still_render_headers() {
        let command = InfoCommand::new(PackageManager::Npm, AliasTable::new());
        let table = command.alias_table();
        assert!(table.is_empty());
        assert!(console::strip_ansi_codes(&table.render()).contains("Alias"));
    }
}
