//! Package manager detection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::file_detection::file_exists;
use super::manifest::ProjectManifest;

/// A JavaScript package manager pm can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// All supported package managers.
    pub const ALL: [PackageManager; 4] = [Self::Npm, Self::Yarn, Self::Pnpm, Self::Bun];

    /// Executable name, also used as the display name.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            "bun" => Ok(Self::Bun),
            _ => Err(format!("unknown package manager: {}", s)),
        }
    }
}

/// Lockfiles in precedence order.
const LOCKFILES: [(&str, PackageManager); 5] = [
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
];

/// Which signal is consulted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionOrder {
    /// Lockfiles, then the manifest `packageManager` field.
    #[default]
    LockfilesFirst,
    /// The manifest `packageManager` field, then lockfiles.
    ManifestFirst,
}

/// What a detection was based on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionSource {
    /// A lockfile with this name exists.
    Lockfile(&'static str),
    /// The manifest declares this `packageManager` value.
    Manifest(String),
    /// Nothing matched.
    Default,
}

impl fmt::Display for DetectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lockfile(name) => write!(f, "found {}", name),
            Self::Manifest(value) => write!(f, "packageManager \"{}\"", value),
            Self::Default => f.write_str("default"),
        }
    }
}

/// Result of package manager detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub manager: PackageManager,
    pub source: DetectionSource,
}

/// Detects the package manager a project uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageManagerDetector {
    order: DetectionOrder,
}

impl PackageManagerDetector {
    /// Create a detector that checks signals in the given order.
    pub fn new(order: DetectionOrder) -> Self {
        Self { order }
    }

    /// Detect the package manager for a project, lockfiles first.
    ///
    /// Never fails: falls back to npm when nothing is found.
    pub fn detect(project_root: &Path) -> PackageManager {
        Self::default().detect_with_source(project_root).manager
    }

    /// Detect the package manager and report which signal decided it.
    pub fn detect_with_source(&self, project_root: &Path) -> Detection {
        let detection = match self.order {
            DetectionOrder::LockfilesFirst => {
                Self::from_lockfiles(project_root).or_else(|| Self::from_manifest(project_root))
            }
            DetectionOrder::ManifestFirst => {
                Self::from_manifest(project_root).or_else(|| Self::from_lockfiles(project_root))
            }
        }
        .unwrap_or(Detection {
            manager: PackageManager::Npm,
            source: DetectionSource::Default,
        });

        tracing::debug!(
            "Detected {} in {} ({})",
            detection.manager,
            project_root.display(),
            detection.source
        );
        detection
    }

    fn from_lockfiles(project_root: &Path) -> Option<Detection> {
        LOCKFILES
            .iter()
            .find(|(name, _)| file_exists(project_root, name))
            .map(|(name, manager)| Detection {
                manager: *manager,
                source: DetectionSource::Lockfile(*name),
            })
    }

    fn from_manifest(project_root: &Path) -> Option<Detection> {
        let manifest = ProjectManifest::read_lenient(project_root)?;
        let name = manifest.package_manager_name()?;
        match name.parse::<PackageManager>() {
            Ok(manager) => Some(Detection {
                manager,
                source: DetectionSource::Manifest(
                    manifest.package_manager.clone().unwrap_or_default(),
                ),
            }),
            Err(e) => {
                tracing::debug!("Ignoring packageManager field: {}", e);
                None
            }
        }
    }
}
