//! Argument translation.
//!
//! Turns the arguments given to pm into the argument vector passed to the
//! package manager:
//!
//! 1. An alias expands to `run` followed by its whitespace-split command.
//! 2. `i` and `install` become `install`.
//! 3. Anything else is a script: `run <script> <args...>`.

use std::fmt;

use crate::config::AliasTable;

/// How a command word was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Expanded from the named alias.
    Alias(String),
    /// Dependency installation.
    Install,
    /// Passed through as a `package.json` script.
    Script,
}

/// The final argument vector for the package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub args: Vec<String>,
    pub resolution: Resolution,
}

impl ResolvedCommand {
    /// The arguments as string slices.
    pub fn args(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

impl fmt::Display for ResolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

/// Translate pm arguments into package manager arguments.
///
/// Returns `None` when no arguments were given.
pub fn translate(args: &[String], aliases: &AliasTable) -> Option<ResolvedCommand> {
    let (first, rest) = args.split_first()?;

    let resolved = if let Some(command) = aliases.get(first) {
        let mut expanded = vec!["run".to_string()];
        expanded.extend(command.split_whitespace().map(str::to_string));
        ResolvedCommand {
            args: expanded,
            resolution: Resolution::Alias(first.clone()),
        }
    } else if first == "i" || first == "install" {
        ResolvedCommand {
            args: vec!["install".to_string()],
            resolution: Resolution::Install,
        }
    } else {
        let mut passthrough = vec!["run".to_string(), first.clone()];
        passthrough.extend(rest.iter().cloned());
        ResolvedCommand {
            args: passthrough,
            resolution: Resolution::Script,
        }
    };

    tracing::debug!("Resolved {:?} to {:?}", args, resolved);
    Some(resolved)
}
