//! Start Menu shortcut management
//!
//! Entirely best-effort: any failure is logged as a warning and reported as
//! false, never propagated. A broken shortcut must not fail an otherwise
//! complete install or uninstall.

use std::fs;
use std::path::{Path, PathBuf};

use crate::product;

/// Creates and removes the user-visible launcher entry in a shared Start
/// Menu folder. The folder is passed in explicitly so tests can point it at
/// a temporary directory.
pub struct ShortcutManager {
    dir: PathBuf,
}

impl ShortcutManager {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Write a `.url` descriptor pointing at the installed executable.
    /// A plain InternetShortcut file avoids the COM machinery a `.lnk`
    /// would need.
    pub fn create(&self, target_exe: &Path) -> bool {
        let descriptor = format!(
            "[InternetShortcut]\nURL=file:///{target}\nIconFile={target}\nIconIndex=0\n",
            target = target_exe.display()
        );
        let path = self.dir.join(format!("{}.url", product::APP_NAME));
        match fs::write(&path, descriptor) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("Warning: Failed to create start menu shortcut: {e}");
                false
            }
        }
    }

    /// Remove any launcher descriptors a previous installation may have
    /// left, including a legacy `.lnk`. Returns true if anything was
    /// removed.
    pub fn remove(&self) -> bool {
        let mut removed = false;
        for name in [
            format!("{}.url", product::APP_NAME),
            format!("{}.lnk", product::APP_NAME),
        ] {
            let path = self.dir.join(&name);
            if path.exists() {
                match fs::remove_file(&path) {
                    Ok(()) => removed = true,
                    Err(e) => {
                        eprintln!("Warning: Failed to remove start menu shortcut {name}: {e}");
                    }
                }
            }
        }
        removed
    }
}
