//! Install command wiring
//!
//! Builds the real system surface (registry path store, OS privilege probe,
//! Start Menu folder) and delegates all business logic to
//! `operations::install`.

use crate::cli::InstallerArgs;
use crate::error::Result;
use crate::operations::{InstallOperation, InstallOptions};
use crate::resource::ResourceLocator;
use crate::shortcut::ShortcutManager;
use crate::system;

pub fn run(args: InstallerArgs) -> Result<()> {
    let privileges = system::OsPrivilegeProbe::new();
    let path_store = system::RegistryPathStore::new();
    let shortcut = ShortcutManager::new(system::shortcut_dir());
    let locator = ResourceLocator::from_env();

    let operation = InstallOperation::new(
        &privileges,
        &path_store,
        &shortcut,
        &locator,
        system::default_install_dir(),
    );

    operation.execute(&InstallOptions {
        install_path: args.install_path,
        no_path: args.no_path,
        silent: args.silent,
    })?;

    Ok(())
}
