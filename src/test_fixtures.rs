//! Shared fakes and fixtures for unit tests
//!
//! The orchestrators take their system surface explicitly, so tests drive
//! them with an in-memory path store, a fixed privilege probe, scripted
//! prompts, and a temporary artifact bundle.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::TempDir;

use crate::error::{Result, SetupError};
use crate::interaction::Interaction;
use crate::product;
use crate::resource::ResourceLocator;
use crate::system::{PathStore, PrivilegeProbe};

/// In-memory search-path store recording writes and broadcasts.
pub struct FakePathStore {
    value: RefCell<String>,
    writes: Cell<usize>,
    broadcasts: Cell<usize>,
    fail: bool,
    hang_broadcast: bool,
}

impl FakePathStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(value.to_string()),
            writes: Cell::new(0),
            broadcasts: Cell::new(0),
            fail: false,
            hang_broadcast: false,
        }
    }

    /// A store whose reads and writes always fail.
    pub fn failing() -> Self {
        let mut store = Self::with_value("");
        store.fail = true;
        store
    }

    /// Simulate listeners that never acknowledge the change broadcast.
    pub fn broadcast_hangs(mut self) -> Self {
        self.hang_broadcast = true;
        self
    }

    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn broadcasts(&self) -> usize {
        self.broadcasts.get()
    }
}

impl PathStore for FakePathStore {
    fn read(&self) -> Result<String> {
        if self.fail {
            return Err(SetupError::PathStoreUnavailable {
                reason: "fake store failure".to_string(),
            });
        }
        Ok(self.value())
    }

    fn write(&self, value: &str) -> Result<()> {
        if self.fail {
            return Err(SetupError::PathStoreUnavailable {
                reason: "fake store failure".to_string(),
            });
        }
        *self.value.borrow_mut() = value.to_string();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn notify_changed(&self, _timeout: Duration) -> bool {
        self.broadcasts.set(self.broadcasts.get() + 1);
        !self.hang_broadcast
    }
}

/// Privilege probe with a fixed answer.
pub struct FixedPrivileges(pub bool);

impl PrivilegeProbe for FixedPrivileges {
    fn is_elevated(&self) -> bool {
        self.0
    }
}

/// Interaction seam answering from a script; panics on any prompt it was
/// not scripted for, which is how silent-mode tests assert no prompting.
pub struct ScriptedInteraction {
    confirm_answer: Cell<Option<bool>>,
    path_answer: RefCell<Option<Option<PathBuf>>>,
}

impl ScriptedInteraction {
    /// No prompt is expected at all.
    pub fn unreachable() -> Self {
        Self {
            confirm_answer: Cell::new(None),
            path_answer: RefCell::new(None),
        }
    }

    /// Expect one confirmation prompt and answer it.
    pub fn confirming(answer: bool) -> Self {
        let interaction = Self::unreachable();
        interaction.confirm_answer.set(Some(answer));
        interaction
    }

    /// Additionally expect one manual-path prompt and answer it.
    pub fn with_manual_path(self, path: Option<PathBuf>) -> Self {
        *self.path_answer.borrow_mut() = Some(path);
        self
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm_uninstall(&self, _install_dir: &Path) -> Result<bool> {
        match self.confirm_answer.take() {
            Some(answer) => Ok(answer),
            None => panic!("unexpected confirmation prompt"),
        }
    }

    fn prompt_install_path(&self) -> Result<Option<PathBuf>> {
        match self.path_answer.borrow_mut().take() {
            Some(answer) => Ok(answer),
            None => panic!("unexpected manual path prompt"),
        }
    }
}

/// Temporary bundle-root directory holding executable artifacts, the way
/// the self-extractor lays them out. Launcher scripts are left to the
/// embedded fallback table.
pub struct TestBundle {
    temp: TempDir,
}

impl TestBundle {
    pub fn with_executables() -> Self {
        let bundle = Self::empty();
        fs::write(bundle.path().join(product::MAIN_EXE), b"MZ fake ruping").unwrap();
        fs::write(
            bundle.path().join(product::UNINSTALLER_EXE),
            b"MZ fake uninstaller",
        )
        .unwrap();
        bundle
    }

    pub fn empty() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn locator(&self) -> ResourceLocator {
        ResourceLocator::new(Some(self.temp.path().to_path_buf()), None)
    }
}

/// Sorted file names directly inside `dir`.
pub fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
