//! RuPing setup tools
//!
//! Shared implementation behind the `ruping-installer` and
//! `ruping-uninstaller` binaries: artifact resolution across packaging
//! layouts, system search-path registration, Start Menu shortcut handling,
//! and the persisted install ledger that drives symmetric uninstall.

pub mod cli;
pub mod commands;
pub mod error;
pub mod interaction;
pub mod ledger;
pub mod operations;
pub mod pathenv;
pub mod product;
pub mod resource;
pub mod shortcut;
pub mod system;

#[cfg(test)]
pub(crate) mod test_fixtures;
