//! Uninstall command wiring
//!
//! Builds the real system surface and the terminal interaction seam, then
//! delegates all business logic to `operations::uninstall`. The directory
//! of the running uninstaller is the first place location resolution looks
//! for a ledger.

use std::path::{Path, PathBuf};

use crate::cli::UninstallerArgs;
use crate::error::Result;
use crate::interaction::ConsoleInteraction;
use crate::operations::{UninstallOperation, UninstallOptions};
use crate::shortcut::ShortcutManager;
use crate::system;

fn own_directory() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| dunce::canonicalize(exe).ok())
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

pub fn run(args: UninstallerArgs) -> Result<()> {
    let privileges = system::OsPrivilegeProbe::new();
    let path_store = system::RegistryPathStore::new();
    let shortcut = ShortcutManager::new(system::shortcut_dir());
    let interaction = ConsoleInteraction;

    let operation = UninstallOperation::new(
        &privileges,
        &path_store,
        &shortcut,
        &interaction,
        own_directory(),
        system::candidate_install_dirs(),
    );

    operation.execute(&UninstallOptions {
        install_path: args.install_path,
        silent: args.silent,
    })?;

    Ok(())
}
