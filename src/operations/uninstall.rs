//! Uninstall operation
//!
//! Locates an existing installation from incomplete information, confirms
//! with the user unless silent, then reverses what the installer did:
//! search-path entry, shortcut, recorded files, and finally the directory
//! itself if nothing else lives there. User-added content is never deleted.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;

use crate::error::{Result, SetupError};
use crate::interaction::Interaction;
use crate::ledger::{self, InstallLedger, LedgerRead};
use crate::pathenv;
use crate::product;
use crate::shortcut::ShortcutManager;
use crate::system::{self, PathStore, PrivilegeProbe};

/// Configuration options for uninstall
#[derive(Debug, Clone, Default)]
pub struct UninstallOptions {
    /// Installation directory override; when absent the location is
    /// discovered from the ledger and conventional locations.
    pub install_path: Option<PathBuf>,
    /// Suppress prompts and non-warning output; auto-confirms removal.
    pub silent: bool,
}

/// Where an installation was found and how. Computed fresh per run, never
/// persisted.
#[derive(Debug)]
pub enum InstallationLocation {
    /// A usable ledger drives the removal.
    Ledger { path: PathBuf, ledger: InstallLedger },
    /// Directory identified by the main executable's presence; removal
    /// falls back to the conventional file list.
    Heuristic { path: PathBuf },
}

impl InstallationLocation {
    fn into_parts(self) -> (PathBuf, Option<InstallLedger>) {
        match self {
            InstallationLocation::Ledger { path, ledger } => (path, Some(ledger)),
            InstallationLocation::Heuristic { path } => (path, None),
        }
    }
}

/// High-level uninstall operation over an explicit system surface.
pub struct UninstallOperation<'a> {
    privileges: &'a dyn PrivilegeProbe,
    path_store: &'a dyn PathStore,
    shortcut: &'a ShortcutManager,
    interaction: &'a dyn Interaction,
    /// Directory of the running uninstaller, first place to look for a
    /// ledger.
    probe_dir: Option<PathBuf>,
    /// Conventional install locations probed last.
    candidate_dirs: Vec<PathBuf>,
}

impl<'a> UninstallOperation<'a> {
    pub fn new(
        privileges: &'a dyn PrivilegeProbe,
        path_store: &'a dyn PathStore,
        shortcut: &'a ShortcutManager,
        interaction: &'a dyn Interaction,
        probe_dir: Option<PathBuf>,
        candidate_dirs: Vec<PathBuf>,
    ) -> Self {
        Self {
            privileges,
            path_store,
            shortcut,
            interaction,
            probe_dir,
            candidate_dirs,
        }
    }

    /// Run the full uninstallation.
    pub fn execute(&self, options: &UninstallOptions) -> Result<()> {
        if !options.silent {
            println!("{}", style("RuPing Standalone Uninstaller").bold());
            println!("=============================");
            println!();
        }

        let location = self.resolve_location(options)?;
        let (install_dir, record) = location.into_parts();

        system::require_elevated(self.privileges)?;

        if !options.silent && !self.interaction.confirm_uninstall(&install_dir)? {
            return Err(SetupError::UserCancelled);
        }

        match pathenv::remove_entry(self.path_store, &install_dir) {
            Ok(_) => {
                if !options.silent {
                    println!("Removed {} from system PATH", install_dir.display());
                }
            }
            Err(e) => eprintln!("Warning: Failed to remove from system PATH: {e}"),
        }

        if self.shortcut.remove() && !options.silent {
            println!("Removed start menu shortcut");
        }

        // The ledger, when usable, is the exhaustive list of what install
        // wrote; nothing beyond it is inferred.
        let files = match &record {
            Some(record) => record.installed_files.clone(),
            None => product::default_file_list(),
        };

        let mut removed_files = 0usize;
        for name in &files {
            let path = install_dir.join(name);
            if path.exists() {
                match fs::remove_file(&path) {
                    Ok(()) => {
                        removed_files += 1;
                        if !options.silent {
                            println!("Removed: {name}");
                        }
                    }
                    Err(e) => eprintln!("Warning: Failed to remove {name}: {e}"),
                }
            }
        }

        self.remove_dir_if_empty(&install_dir, options.silent);

        if !options.silent {
            println!();
            println!(
                "{}",
                style("RuPing has been successfully uninstalled!").green()
            );
            println!("Removed {removed_files} files.");
            println!("Please restart your command prompt to update PATH changes.");
        }

        Ok(())
    }

    /// Resolve the install directory: explicit override, ledger next to the
    /// running program, the program's own directory, then conventional
    /// locations. In interactive mode a manual path is prompted for as a
    /// last resort; in silent mode resolution failure is immediate.
    fn resolve_location(&self, options: &UninstallOptions) -> Result<InstallationLocation> {
        if let Some(dir) = &options.install_path {
            if dir.is_dir() {
                return Ok(classify(dir.clone()));
            }
        } else {
            if let Some(probe) = &self.probe_dir {
                if let LedgerRead::Found(record) = ledger::read(probe) {
                    return Ok(InstallationLocation::Ledger {
                        path: record.install_path.clone(),
                        ledger: record,
                    });
                }
                if probe.join(product::MAIN_EXE).is_file() {
                    return Ok(InstallationLocation::Heuristic {
                        path: probe.clone(),
                    });
                }
            }

            for dir in &self.candidate_dirs {
                if dir.join(product::MAIN_EXE).is_file() {
                    return Ok(InstallationLocation::Heuristic { path: dir.clone() });
                }
            }
        }

        if options.silent {
            return Err(SetupError::InstallationNotFound);
        }

        eprintln!("{} installation not found.", product::APP_NAME);
        match self.interaction.prompt_install_path()? {
            Some(path) if path.is_dir() => Ok(classify(path)),
            Some(_) => Err(SetupError::InstallationNotFound),
            None => Err(SetupError::UserCancelled),
        }
    }

    fn remove_dir_if_empty(&self, install_dir: &Path, silent: bool) {
        match fs::read_dir(install_dir) {
            Ok(mut entries) => {
                if entries.next().is_none() {
                    match fs::remove_dir(install_dir) {
                        Ok(()) => {
                            if !silent {
                                println!(
                                    "Removed installation directory: {}",
                                    install_dir.display()
                                );
                            }
                        }
                        Err(e) => {
                            eprintln!("Warning: Failed to remove installation directory: {e}");
                        }
                    }
                } else if !silent {
                    println!(
                        "Installation directory not empty, keeping: {}",
                        install_dir.display()
                    );
                }
            }
            Err(e) => eprintln!("Warning: Failed to inspect installation directory: {e}"),
        }
    }
}

/// A directory holding a usable ledger is ledger-backed; anything else is
/// heuristic and falls back to the conventional file list.
fn classify(dir: PathBuf) -> InstallationLocation {
    match ledger::read(&dir) {
        LedgerRead::Found(ledger) => InstallationLocation::Ledger { path: dir, ledger },
        LedgerRead::Missing | LedgerRead::Unreadable => {
            InstallationLocation::Heuristic { path: dir }
        }
    }
}
