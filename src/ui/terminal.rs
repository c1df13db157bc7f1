//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, PmTheme, Table, UserInterface};

/// Writes messages to stdout and diagnostics to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PmTheme,
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            PmTheme::new()
        } else {
            PmTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_command(&mut self, command_line: &str) {
        writeln!(self.out, "{}", self.theme.format_command(command_line)).ok();
    }

    fn show_table(&mut self, table: &Table) {
        writeln!(self.out, "{}", table.render()).ok();
    }
}
