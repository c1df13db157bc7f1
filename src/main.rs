//! pm CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pm::cli::{Cli, CommandDispatcher};
use pm::config::{current_project_root, InstallPaths};
use pm::shell::ShellRunner;
use pm::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with the package manager's stdout.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pm=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pm=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pm starting with args: {:?}", cli);

    let mut ui = TerminalUI::new();

    let project_root = match current_project_root() {
        Ok(root) => root,
        Err(e) => {
            ui.error(&format!("Error: {:#}", e));
            return ExitCode::from(1);
        }
    };
    let paths = InstallPaths::resolve(cli.home.clone());
    let dispatcher = CommandDispatcher::new(project_root, paths);

    match dispatcher.dispatch(&cli, &mut ui, &ShellRunner) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
