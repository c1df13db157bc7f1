//! CLI argument definitions.
//!
//! pm has no subcommands of its own: the first positional argument is an
//! alias, a script name, or `i`/`install`, and everything after it is
//! forwarded untouched. clap's built-in help and version flags are disabled
//! so `-h` and `-v` after the command word reach the package manager.

use clap::Parser;
use std::path::PathBuf;

use crate::config::HOME_ENV;

const COMMANDS_HELP: &str = "\
Commands:
  i, install        Install dependencies
  <alias>           Runs the command mapped in alias.json
  <script>          Runs the package.json script

Options are only read before the command; everything after it is forwarded.
Start with `--` to forward a command that looks like a pm option.";

/// Run scripts through whichever JavaScript package manager a project uses.
#[derive(Debug, Parser)]
#[command(name = "pm")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(override_usage = "pm [OPTIONS] [command] [args]...")]
#[command(after_help = COMMANDS_HELP)]
pub struct Cli {
    /// Show this help message
    #[arg(short, long)]
    pub help: bool,

    /// Show CLI version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Directory containing alias.json (overrides the install location)
    #[arg(long, env = HOME_ENV, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Alias, script, or install command followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}
