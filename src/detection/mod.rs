//! Package manager detection.

pub mod file_detection;
pub mod manifest;
pub mod package_manager;

pub use manifest::ProjectManifest;
pub use package_manager::{
    Detection, DetectionOrder, DetectionSource, PackageManager, PackageManagerDetector,
};
