//! The alias table.
//!
//! `alias.json` is a flat JSON object mapping a short name to the arguments
//! that should follow `run`:
//!
//! ```json
//! { "b": "build --watch", "t": "test --coverage" }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{PmError, Result};

/// File name of the alias table.
pub const ALIAS_FILE: &str = "alias.json";

/// Mapping from alias name to a whitespace-separated argument string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl AliasTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table from `path`.
    ///
    /// A missing file yields an empty table. A file that is not a JSON object
    /// of strings yields [`PmError::AliasParse`].
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No alias file at {}", path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let table = Self::parse(&content).map_err(|e| PmError::AliasParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!("Loaded {} aliases from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse alias JSON.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        let aliases: BTreeMap<String, String> = serde_json::from_str(content)?;
        Ok(Self { aliases })
    }

    /// Add or replace an alias.
    pub fn insert(&mut self, name: impl Into<String>, command: impl Into<String>) {
        self.aliases.insert(name.into(), command.into());
    }

    /// Look up an alias. Aliases with a blank command never match.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases
            .get(name)
            .map(String::as_str)
            .filter(|command| !command.trim().is_empty())
    }

    /// Iterate over `(name, command)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether the table has no aliases.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            aliases: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
