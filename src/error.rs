//! Error types and handling for the RuPing setup tools
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Only fatal conditions live here; best-effort operations (shortcut, path
//! broadcast, ledger persistence) report a success flag instead so the
//! orchestrators can downgrade their failures to warnings.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for installer and uninstaller operations
#[derive(Error, Diagnostic, Debug)]
pub enum SetupError {
    #[error("Administrator privileges required")]
    #[diagnostic(
        code(ruping::setup::elevation_required),
        help("Re-run this program from an elevated (administrator) prompt")
    )]
    ElevationRequired,

    #[error("Required artifact not found: {name}")]
    #[diagnostic(
        code(ruping::resource::not_found),
        help("Run the installer from the distributed bundle, or next to a built ruping.exe")
    )]
    ResourceNotFound { name: String },

    #[error("Failed to create installation directory {path}: {reason}")]
    #[diagnostic(code(ruping::install::dir_create_failed))]
    InstallDirCreateFailed { path: String, reason: String },

    #[error("Failed to extract {name}: {reason}")]
    #[diagnostic(code(ruping::install::extract_failed))]
    ExtractFailed { name: String, reason: String },

    #[error("RuPing installation not found")]
    #[diagnostic(
        code(ruping::uninstall::not_found),
        help("Pass --install-path to point at the installation directory")
    )]
    InstallationNotFound,

    #[error("Cancelled by user")]
    #[diagnostic(code(ruping::setup::cancelled))]
    UserCancelled,

    #[error("System search path store unavailable: {reason}")]
    #[diagnostic(code(ruping::pathenv::store_unavailable))]
    PathStoreUnavailable { reason: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(ruping::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(ruping::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ruping::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(err: serde_json::Error) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SetupError>;
