//! Install location resolution.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::alias::ALIAS_FILE;
use crate::detection::manifest::MANIFEST_FILE;
use crate::error::Result;

/// Environment variable overriding the install base directory.
pub const HOME_ENV: &str = "PM_HOME";

/// Files that live in the pm install base directory.
///
/// An installation is laid out as `<base>/bin/pm`, with `alias.json` and an
/// optional `package.json` directly under `<base>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    base: PathBuf,
}

impl InstallPaths {
    /// Use an explicit base directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Resolve the base directory.
    ///
    /// An explicit override wins; otherwise the base is derived from the
    /// location of the running executable. Falls back to the current
    /// directory if the executable path is unavailable.
    pub fn resolve(override_base: Option<PathBuf>) -> Self {
        if let Some(base) = override_base {
            tracing::debug!("Using install base override {}", base.display());
            return Self::new(base);
        }

        match Self::from_current_exe() {
            Ok(paths) => paths,
            Err(e) => {
                tracing::debug!("{}", e);
                Self::new(std::env::current_dir().unwrap_or_default())
            }
        }
    }

    /// Derive the base directory from the running executable.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().context("Could not locate the pm executable")?;
        Ok(Self::from_executable(&exe))
    }

    /// Derive the base directory from an executable path (`<base>/bin/pm`).
    pub fn from_executable(exe: &Path) -> Self {
        let exe = exe.canonicalize().unwrap_or_else(|_| exe.to_path_buf());
        let bin_dir = exe.parent().unwrap_or_else(|| Path::new("."));
        let base = bin_dir.parent().unwrap_or(bin_dir);
        Self::new(base)
    }

    /// The base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path to the alias table.
    pub fn alias_file(&self) -> PathBuf {
        self.base.join(ALIAS_FILE)
    }

    /// Path to pm's own manifest.
    pub fn manifest_file(&self) -> PathBuf {
        self.base.join(MANIFEST_FILE)
    }
}

/// The directory pm was invoked from, which the package manager runs in.
pub fn current_project_root() -> Result<PathBuf> {
    let root = std::env::current_dir().context("Could not determine the current directory")?;
    Ok(root)
}
