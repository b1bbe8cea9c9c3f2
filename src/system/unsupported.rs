//! Stub system surface for non-Windows hosts
//!
//! The setup tools target the Windows environment, shortcut, and search-path
//! conventions. On other hosts the real store reports unavailable and the
//! privilege probe fails safe, so the binaries refuse to mutate anything.

use std::time::Duration;

use super::{PathStore, PrivilegeProbe};
use crate::error::{Result, SetupError};

#[derive(Default)]
pub struct RegistryPathStore;

impl RegistryPathStore {
    pub fn new() -> Self {
        Self
    }
}

impl PathStore for RegistryPathStore {
    fn read(&self) -> Result<String> {
        Err(SetupError::PathStoreUnavailable {
            reason: "the system search path registry is only available on Windows".to_string(),
        })
    }

    fn write(&self, _value: &str) -> Result<()> {
        Err(SetupError::PathStoreUnavailable {
            reason: "the system search path registry is only available on Windows".to_string(),
        })
    }

    fn notify_changed(&self, _timeout: Duration) -> bool {
        false
    }
}

#[derive(Default)]
pub struct OsPrivilegeProbe;

impl OsPrivilegeProbe {
    pub fn new() -> Self {
        Self
    }
}

impl PrivilegeProbe for OsPrivilegeProbe {
    fn is_elevated(&self) -> bool {
        false
    }
}
