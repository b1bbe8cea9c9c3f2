//! The persisted installation record
//!
//! Written once at the end of a successful install, read once at uninstall
//! time to drive symmetric removal. The record is never mutated in place;
//! uninstall deletes it along with everything else it lists.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetupError};
use crate::product;

/// Persisted record of a completed installation.
///
/// `installed_files` is the authoritative, exhaustive list of what the
/// installer wrote, relative to `install_path`; the uninstaller must not
/// infer files beyond it when the record is usable.
#[derive(Debug, Clone, Serialize)]
pub struct InstallLedger {
    pub install_path: PathBuf,
    pub version: String,
    pub aliases: Vec<String>,
    pub installed_files: Vec<String>,
}

/// Outcome of reading the ledger from an install directory.
///
/// `Unreadable` covers both unparseable JSON and a parseable record missing
/// `installed_files`; callers treat it exactly like `Missing` and fall back
/// to heuristics rather than aborting.
#[derive(Debug)]
pub enum LedgerRead {
    Found(InstallLedger),
    Missing,
    Unreadable,
}

/// On-disk shape, tolerant of missing and unknown fields.
#[derive(Deserialize)]
struct RawLedger {
    #[serde(default)]
    install_path: Option<PathBuf>,
    #[serde(default)]
    version: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default)]
    installed_files: Option<Vec<String>>,
}

pub fn ledger_path(install_dir: &Path) -> PathBuf {
    install_dir.join(product::LEDGER_FILE)
}

/// Serialize the record into the install directory. Callers downgrade a
/// failure to a warning; the ledger is an optimization for clean uninstall,
/// not a correctness gate for install.
pub fn write(install_dir: &Path, ledger: &InstallLedger) -> Result<()> {
    let path = ledger_path(install_dir);
    let json =
        serde_json::to_string_pretty(ledger).map_err(|e| SetupError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    fs::write(&path, json).map_err(|e| SetupError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Deserialize the record from an install directory.
pub fn read(install_dir: &Path) -> LedgerRead {
    let path = ledger_path(install_dir);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return LedgerRead::Missing,
        Err(_) => return LedgerRead::Unreadable,
    };

    let raw: RawLedger = match serde_json::from_str(&contents) {
        Ok(raw) => raw,
        Err(_) => return LedgerRead::Unreadable,
    };

    match raw.installed_files {
        Some(installed_files) => LedgerRead::Found(InstallLedger {
            install_path: raw
                .install_path
                .unwrap_or_else(|| install_dir.to_path_buf()),
            version: raw.version,
            aliases: raw.aliases,
            installed_files,
        }),
        None => LedgerRead::Unreadable,
    }
}
