//! Windows implementations of the system surface
//!
//! The search path lives in the `PATH` value of the machine-wide environment
//! key; changes are announced with a bounded `WM_SETTINGCHANGE` broadcast so
//! a hung listener cannot stall the run.

use std::io;
use std::time::Duration;

use windows_sys::Win32::Foundation::LPARAM;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    HWND_BROADCAST, SMTO_ABORTIFHUNG, SendMessageTimeoutW, WM_SETTINGCHANGE,
};
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ, KEY_SET_VALUE, REG_EXPAND_SZ};
use winreg::{RegKey, RegValue};

use super::{PathStore, PrivilegeProbe};
use crate::error::{Result, SetupError};

const ENVIRONMENT_KEY: &str = r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment";
const PATH_VALUE: &str = "PATH";

fn store_error(err: io::Error) -> SetupError {
    SetupError::PathStoreUnavailable {
        reason: err.to_string(),
    }
}

/// The machine-wide `PATH` registry value.
#[derive(Default)]
pub struct RegistryPathStore;

impl RegistryPathStore {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, access: u32) -> Result<RegKey> {
        RegKey::predef(HKEY_LOCAL_MACHINE)
            .open_subkey_with_flags(ENVIRONMENT_KEY, access)
            .map_err(store_error)
    }
}

impl PathStore for RegistryPathStore {
    fn read(&self) -> Result<String> {
        let key = self.open(KEY_READ)?;
        key.get_value::<String, _>(PATH_VALUE).map_err(store_error)
    }

    fn write(&self, value: &str) -> Result<()> {
        let key = self.open(KEY_SET_VALUE)?;
        // REG_EXPAND_SZ keeps %VAR% references in unrelated entries expandable.
        let mut bytes: Vec<u8> = Vec::with_capacity((value.len() + 1) * 2);
        for unit in value.encode_utf16().chain(std::iter::once(0)) {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        key.set_raw_value(
            PATH_VALUE,
            &RegValue {
                bytes,
                vtype: REG_EXPAND_SZ,
            },
        )
        .map_err(store_error)
    }

    fn notify_changed(&self, timeout: Duration) -> bool {
        let section: Vec<u16> = "Environment".encode_utf16().chain(Some(0)).collect();
        let mut result: usize = 0;
        let status = unsafe {
            SendMessageTimeoutW(
                HWND_BROADCAST,
                WM_SETTINGCHANGE,
                0,
                section.as_ptr() as LPARAM,
                SMTO_ABORTIFHUNG,
                timeout.as_millis() as u32,
                &mut result,
            )
        };
        status != 0
    }
}

/// Probes elevation by asking for write access to the same environment key
/// installation needs to mutate. Any error reads as "not elevated".
#[derive(Default)]
pub struct OsPrivilegeProbe;

impl OsPrivilegeProbe {
    pub fn new() -> Self {
        Self
    }
}

impl PrivilegeProbe for OsPrivilegeProbe {
    fn is_elevated(&self) -> bool {
        RegKey::predef(HKEY_LOCAL_MACHINE)
            .open_subkey_with_flags(ENVIRONMENT_KEY, KEY_READ | KEY_SET_VALUE)
            .is_ok()
    }
}
