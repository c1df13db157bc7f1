//! Opportunistic `package.json` reading.
//!
//! Only the two fields pm cares about are deserialized. Everything else in
//! the manifest is ignored, so any JSON object parses.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// File name of a JavaScript project manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// The subset of `package.json` read by pm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectManifest {
    /// Corepack-style `"<name>@<version>"` declaration.
    #[serde(rename = "packageManager")]
    pub package_manager: Option<String>,

    /// Package version.
    pub version: Option<String>,
}

impl ProjectManifest {
    /// Load the manifest at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist and an error when it
    /// exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(Self::parse(&content)?))
    }

    /// Parse manifest JSON.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load `package.json` from a directory, treating any failure as absent.
    pub fn read_lenient(dir: &Path) -> Option<Self> {
        let path = dir.join(MANIFEST_FILE);
        match Self::load(&path) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::debug!("Ignoring unreadable manifest {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Tool name from the `packageManager` field: the text before the first `@`.
    pub fn package_manager_name(&self) -> Option<&str> {
        let value = self.package_manager.as_deref()?.trim();
        let name = value.split('@').next().unwrap_or(value);
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}
