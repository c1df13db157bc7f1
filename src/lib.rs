//! pm - run scripts through whichever JavaScript package manager a project uses.
//!
//! pm looks at the current directory to decide between npm, yarn, pnpm and
//! bun, expands short aliases from an `alias.json` next to its installation,
//! and forwards the result to the package manager with stdio inherited.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing, and dispatch
//! - [`config`] - Install location, alias table, and version
//! - [`detection`] - Package manager detection
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Running the package manager
//! - [`translate`] - Turning pm arguments into package manager arguments
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use pm::config::AliasTable;
//! use pm::translate::translate;
//!
//! let aliases: AliasTable = [("b", "build --watch")].into_iter().collect();
//! let resolved = translate(&["b".to_string()], &aliases).unwrap();
//! assert_eq!(resolved.args(), vec!["run", "build", "--watch"]);
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod shell;
pub mod translate;
pub mod ui;

pub use error::{PmError, Result};
