//! Visual theme and styling.

use console::Style;

/// pm's visual theme.
#[derive(Debug, Clone)]
pub struct PmTheme {
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for the "Running:" label (magenta).
    pub info: Style,
    /// Style for commands shown in output (bold).
    pub command: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
}

impl Default for PmTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PmTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            command: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            command: Style::new(),
            border: Style::new(),
        }
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format the announcement of a command about to run.
    pub fn format_command(&self, command_line: &str) -> String {
        format!(
            "{} {}",
            self.info.apply_to("Running:"),
            self.command.apply_to(command_line)
        )
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_has_no_escape_codes() {
        let theme = PmTheme::plain();
        assert_eq!(theme.format_warning("careful"), "⚠ careful");
        assert_eq!(theme.format_error("broken"), "✗ broken");
        assert_eq!(
            theme.format_command("npm run build"),
            "Running: npm run build"
        );
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = PmTheme::new();
        let line = console::strip_ansi_codes(&theme.format_command("yarn install")).to_string();
        assert_eq!(line, "Running: yarn install");
    }
}
