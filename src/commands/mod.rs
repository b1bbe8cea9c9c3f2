//! Thin CLI wrappers wiring the real system surface to the operations

pub mod install;
pub mod uninstall;
