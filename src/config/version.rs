//! Version reporting.

use std::path::Path;

use crate::detection::ProjectManifest;

/// Version used when a manifest exists but does not yield one.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Read pm's version.
///
/// When a `package.json` sits in the install base directory its `version`
/// field is authoritative, and `"unknown"` is reported if it cannot be read
/// or has no version. Without such a manifest the compiled-in crate version
/// is used.
pub fn read_version(manifest_path: &Path) -> String {
    match ProjectManifest::load(manifest_path) {
        Ok(Some(manifest)) => manifest
            .version
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
        Ok(None) => env!("CARGO_PKG_VERSION").to_string(),
        Err(e) => {
            tracing::debug!("Could not read {}: {}", manifest_path.display(), e);
            UNKNOWN_VERSION.to_string()
        }
    }
}
