//! Install and uninstall orchestration
//!
//! The orchestrators compose the leaf components (resource locator, path
//! mutator, shortcut manager, ledger) and own the fatal-versus-warning
//! policy. No component calls back into an orchestrator.

pub mod install;
pub mod uninstall;

pub use install::{InstallOperation, InstallOptions};
pub use uninstall::{UninstallOperation, UninstallOptions};
