//! Install operation
//!
//! Deploys the artifact set into the install directory, registers the
//! directory on the system search path, creates the Start Menu shortcut,
//! and records the install ledger. Installation counts as successful once
//! every artifact is extracted; path, shortcut, and ledger failures are
//! warnings only.
//!
//! Re-running against the same directory is idempotent: files and the
//! shortcut are overwritten, the path entry is never duplicated, the ledger
//! is rewritten.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;

use crate::error::{Result, SetupError};
use crate::ledger::{self, InstallLedger};
use crate::pathenv;
use crate::product;
use crate::resource::ResourceLocator;
use crate::shortcut::ShortcutManager;
use crate::system::{self, PathStore, PrivilegeProbe};

/// Configuration options for install
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Target directory override; defaults to the per-OS program directory
    /// joined with the product name.
    pub install_path: Option<PathBuf>,
    /// Skip search-path registration.
    pub no_path: bool,
    /// Suppress all non-warning output.
    pub silent: bool,
}

/// High-level install operation over an explicit system surface.
pub struct InstallOperation<'a> {
    privileges: &'a dyn PrivilegeProbe,
    path_store: &'a dyn PathStore,
    shortcut: &'a ShortcutManager,
    locator: &'a ResourceLocator,
    default_install_dir: PathBuf,
}

impl<'a> InstallOperation<'a> {
    pub fn new(
        privileges: &'a dyn PrivilegeProbe,
        path_store: &'a dyn PathStore,
        shortcut: &'a ShortcutManager,
        locator: &'a ResourceLocator,
        default_install_dir: PathBuf,
    ) -> Self {
        Self {
            privileges,
            path_store,
            shortcut,
            locator,
            default_install_dir,
        }
    }

    /// Run the full installation. Returns the install directory on success.
    pub fn execute(&self, options: &InstallOptions) -> Result<PathBuf> {
        system::require_elevated(self.privileges)?;

        let install_dir = options
            .install_path
            .clone()
            .unwrap_or_else(|| self.default_install_dir.clone());

        if !options.silent {
            println!("{}", style("RuPing Standalone Installer").bold());
            println!("===========================");
            println!();
            println!("Installing to: {}", install_dir.display());
        }

        fs::create_dir_all(&install_dir).map_err(|e| SetupError::InstallDirCreateFailed {
            path: install_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        // Any single extraction failure aborts the whole install. Files
        // already written stay in place; a re-run overwrites and completes.
        let mut installed_files = Vec::new();
        for artifact in product::required_artifacts() {
            let bytes = self.locator.locate(&artifact)?;
            let target = install_dir.join(&artifact.logical_name);
            write_artifact(&target, &bytes)?;
            installed_files.push(artifact.logical_name.clone());
            if !options.silent {
                println!("Extracted: {}", artifact.logical_name);
            }
        }

        if !options.no_path {
            match pathenv::add_entry(self.path_store, &install_dir) {
                Ok(_) => {
                    if !options.silent {
                        println!("Added {} to system PATH", install_dir.display());
                    }
                }
                Err(e) => eprintln!("Warning: Failed to update system PATH: {e}"),
            }
        }

        if self.shortcut.create(&install_dir.join(product::MAIN_EXE)) && !options.silent {
            println!("Created start menu shortcut");
        }

        let mut recorded = installed_files;
        recorded.push(product::LEDGER_FILE.to_string());
        let record = InstallLedger {
            install_path: install_dir.clone(),
            version: product::VERSION.to_string(),
            aliases: product::ALIASES.iter().map(|a| a.to_string()).collect(),
            installed_files: recorded,
        };
        if let Err(e) = ledger::write(&install_dir, &record) {
            eprintln!("Warning: Failed to save installation info: {e}");
        }

        if !options.silent {
            print_summary(&install_dir);
        }

        Ok(install_dir)
    }
}

fn write_artifact(target: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| SetupError::ExtractFailed {
            name: target.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    fs::write(target, bytes).map_err(|e| SetupError::ExtractFailed {
        name: target.display().to_string(),
        reason: e.to_string(),
    })
}

fn print_summary(install_dir: &Path) {
    println!();
    println!("{}", style("Installation completed successfully!").green());
    println!();
    println!("Available commands:");
    for alias in product::ALIASES {
        println!("  {alias} 8.8.8.8              # Basic ping");
    }
    println!();
    println!("Important notes:");
    println!("- {} requires administrator privileges to run", product::APP_NAME);
    println!("- Please restart your command prompt to use the new commands");
    println!("- Use 'ruping --help' to see all available options");
    println!();
    println!("To uninstall:");
    println!(
        "  \"{}\"",
        install_dir.join(product::UNINSTALLER_EXE).display()
    );
}
