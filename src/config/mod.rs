//! Configuration that lives next to the pm installation.
//!
//! - [`paths`] - Resolving the install base directory
//! - [`alias`] - The `alias.json` alias table
//! - [`version`] - The version string reported by `--version`

pub mod alias;
pub mod paths;
pub mod version;

pub use alias::{AliasTable, ALIAS_FILE};
pub use paths::{current_project_root, InstallPaths, HOME_ENV};
pub use version::read_version;
