//! User interaction seams for the uninstaller
//!
//! Prompts go through a trait so the orchestrator can be driven by scripted
//! answers in tests and never touches a terminal in silent mode.

use std::path::{Path, PathBuf};

use inquire::{Confirm, Text};

use crate::error::{Result, SetupError};
use crate::product;

pub trait Interaction {
    /// Ask whether to proceed with removing the given installation.
    fn confirm_uninstall(&self, install_dir: &Path) -> Result<bool>;

    /// Last-resort manual path prompt when no installation was found.
    /// `None` means the user declined to provide one.
    fn prompt_install_path(&self) -> Result<Option<PathBuf>>;
}

/// Interactive prompts on the controlling terminal.
pub struct ConsoleInteraction;

impl Interaction for ConsoleInteraction {
    fn confirm_uninstall(&self, install_dir: &Path) -> Result<bool> {
        println!(
            "Found {} installation at: {}",
            product::APP_NAME,
            install_dir.display()
        );
        Confirm::new(&format!(
            "Are you sure you want to uninstall {}?",
            product::APP_NAME
        ))
        .with_default(false)
        .prompt()
        .map_err(|e| SetupError::IoError {
            message: format!("Failed to read confirmation: {e}"),
        })
    }

    fn prompt_install_path(&self) -> Result<Option<PathBuf>> {
        let answer = Text::new("Enter the installation directory (leave empty to cancel):")
            .prompt()
            .map_err(|e| SetupError::IoError {
                message: format!("Failed to read path: {e}"),
            })?;

        let trimmed = answer.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(trimmed)))
        }
    }
}
