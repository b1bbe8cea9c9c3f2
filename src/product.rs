//! Product constants shared by the installer and uninstaller

/// User-visible product name, also the default installation folder name.
pub const APP_NAME: &str = "RuPing";

/// The main executable artifact.
pub const MAIN_EXE: &str = "ruping.exe";

/// The uninstaller executable deployed alongside the tool.
pub const UNINSTALLER_EXE: &str = "ruping-uninstaller.exe";

/// Command aliases, each shipped as a `.cmd` launcher script.
pub const ALIASES: [&str; 3] = ["ruping", "rustping", "rping"];

/// Filename of the persisted install ledger inside the install directory.
pub const LEDGER_FILE: &str = "install_info.json";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A named unit the installer must place into the target directory.
///
/// Identity is the logical name; once written, a deployed file is addressed
/// purely by its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub logical_name: String,
    pub is_binary: bool,
}

impl Artifact {
    pub fn binary(logical_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            is_binary: true,
        }
    }

    pub fn text(logical_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            is_binary: false,
        }
    }
}

/// The fixed set of artifacts every installation deploys: the main
/// executable, the uninstaller, and one launcher script per alias.
pub fn required_artifacts() -> Vec<Artifact> {
    let mut artifacts = vec![Artifact::binary(MAIN_EXE), Artifact::binary(UNINSTALLER_EXE)];
    for alias in ALIASES {
        artifacts.push(Artifact::text(format!("{alias}.cmd")));
    }
    artifacts
}

/// Conventional filenames to delete when no usable ledger is present.
pub fn default_file_list() -> Vec<String> {
    let mut files = vec![MAIN_EXE.to_string(), UNINSTALLER_EXE.to_string()];
    for alias in ALIASES {
        files.push(format!("{alias}.cmd"));
    }
    files.push(LEDGER_FILE.to_string());
    files
}
