//! OS environment surface: search-path store, privilege probe, well-known
//! directories
//!
//! Shared system state is always handed to the mutating components through
//! the narrow traits defined here, so they stay unit-testable against
//! in-memory fakes.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, SetupError};
use crate::product;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::{OsPrivilegeProbe, RegistryPathStore};

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
pub use unsupported::{OsPrivilegeProbe, RegistryPathStore};

/// How long to wait for other processes to acknowledge a settings-changed
/// broadcast before giving up. Timing out is not an error.
pub const BROADCAST_TIMEOUT: Duration = Duration::from_secs(3);

/// The system-wide executable search path, as a single shared raw value.
///
/// Read-modify-write races against other installers are accepted (last
/// writer wins); there is no application-level locking.
pub trait PathStore {
    fn read(&self) -> Result<String>;

    fn write(&self, value: &str) -> Result<()>;

    /// Tell other running processes the environment changed. Best-effort:
    /// returns false when the broadcast timed out or could not be delivered.
    fn notify_changed(&self, timeout: Duration) -> bool;

    /// Delimiter separating entries in the raw value.
    fn delimiter(&self) -> char {
        ';'
    }
}

/// Whether the current process holds the elevated rights required to mutate
/// shared system state. Probe errors read as "not elevated".
pub trait PrivilegeProbe {
    fn is_elevated(&self) -> bool;
}

/// Gate invoked once at the start of install and uninstall, before any
/// mutation.
pub fn require_elevated(probe: &dyn PrivilegeProbe) -> Result<()> {
    if probe.is_elevated() {
        Ok(())
    } else {
        Err(SetupError::ElevationRequired)
    }
}

/// Per-OS default program directory joined with the product name.
pub fn default_install_dir() -> PathBuf {
    std::env::var_os("PROGRAMFILES")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("C:\\Program Files"))
        .join(product::APP_NAME)
}

/// Shared Start Menu programs folder where the shortcut descriptor lives.
pub fn shortcut_dir() -> PathBuf {
    std::env::var_os("PROGRAMDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("C:\\ProgramData"))
        .join("Microsoft")
        .join("Windows")
        .join("Start Menu")
        .join("Programs")
}

/// Conventional installation locations probed when no ledger points at the
/// install directory.
pub fn candidate_install_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![default_install_dir()];
    if let Some(local) = std::env::var_os("LOCALAPPDATA") {
        dirs.push(PathBuf::from(local).join(product::APP_NAME));
    }
    dirs.push(PathBuf::from("C:\\").join(product::APP_NAME));
    dirs
}
