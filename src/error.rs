//! Error types for pm operations.
//!
//! This module defines [`PmError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration reads (alias file, manifests) recover locally and never
//!   surface as failures; `AliasParse` exists so callers can warn about it
//! - A failing child process is not an error: its exit code is mirrored
//! - Environment lookups (current directory, executable path) attach
//!   `anyhow` context and surface as `PmError::Other`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pm operations.
#[derive(Debug, Error)]
pub enum PmError {
    /// The alias file exists but is not a JSON object of strings.
    #[error("Could not parse {path}: {message}")]
    AliasParse { path: PathBuf, message: String },

    /// The shell used to launch the package manager could not be started.
    #[error("Failed to spawn '{command}': {message}")]
    Spawn { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pm operations.
pub type Result<T> = std::result::Result<T, PmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_parse_displays_path_and_message() {
        let err = PmError::AliasParse {
            path: PathBuf::from("/opt/pm/alias.json"),
            message: "expected value at line 1 column 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/pm/alias.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn spawn_displays_command_and_message() {
        let err = PmError::Spawn {
            command: "pnpm run build".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pnpm run build"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PmError = io_err.into();
        assert!(matches!(err, PmError::Io(_)));
    }

    #[test]
    fn json_error_converts_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PmError = json_err.into();
        assert!(matches!(err, PmError::Json(_)));
    }

    #[test]
    fn anyhow_context_is_kept_transparently() {
        use anyhow::Context;

        let source: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err: PmError = source
            .context("Could not determine the current directory")
            .unwrap_err()
            .into();

        assert!(matches!(err, PmError::Other(_)));
        assert_eq!(err.to_string(), "Could not determine the current directory");
        assert!(format!("{:#}", err).contains("denied"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PmError::Spawn {
                command: "npm".into(),
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
