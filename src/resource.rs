//! Artifact resolution across packaging layouts
//!
//! The installer may run from a self-extracting bundle, from a checkout next
//! to build output, or as a bare script-sized binary carrying embedded
//! payloads. `ResourceLocator` tries each layout in a fixed priority order
//! and returns the first readable candidate's bytes, without merging or
//! validating across sources.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use base64::prelude::{BASE64_STANDARD, Engine as _};

use crate::error::{Result, SetupError};
use crate::product::Artifact;

/// Environment variable the self-extracting bundle sets to its extraction
/// root before launching the installer.
pub const BUNDLE_ROOT_ENV: &str = "RUPING_BUNDLE";

/// Launcher script shared by every alias; forwards all arguments to the
/// main executable sitting next to it.
const LAUNCHER_CMD: &str = "@echo off\n\"%~dp0ruping.exe\" %*\n";

/// Inline fallback content for an artifact.
enum Embedded {
    Text(&'static str),
    /// Base64-encoded bytes, populated by the packaging step. Empty until
    /// then, which counts as a miss.
    Binary(&'static str),
}

const EMBEDDED: &[(&str, Embedded)] = &[
    ("ruping.exe", Embedded::Binary("")),
    ("ruping-uninstaller.exe", Embedded::Binary("")),
    ("ruping.cmd", Embedded::Text(LAUNCHER_CMD)),
    ("rustping.cmd", Embedded::Text(LAUNCHER_CMD)),
    ("rping.cmd", Embedded::Text(LAUNCHER_CMD)),
];

/// Finds artifact bytes from the bundle root, well-known local paths, or the
/// embedded fallback table, in that order.
pub struct ResourceLocator {
    bundle_root: Option<PathBuf>,
    exe_dir: Option<PathBuf>,
}

impl ResourceLocator {
    /// Build a locator from the running process: bundle root from the
    /// environment (if set and existing), local candidates relative to the
    /// current executable.
    pub fn from_env() -> Self {
        let bundle_root = env::var_os(BUNDLE_ROOT_ENV)
            .map(PathBuf::from)
            .filter(|p| p.is_dir());
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|p| dunce::canonicalize(p).ok())
            .and_then(|p| p.parent().map(Path::to_path_buf));
        Self {
            bundle_root,
            exe_dir,
        }
    }

    /// Build a locator with explicit roots.
    pub fn new(bundle_root: Option<PathBuf>, exe_dir: Option<PathBuf>) -> Self {
        Self {
            bundle_root,
            exe_dir,
        }
    }

    /// Resolve an artifact's bytes, trying each packaging layout in priority
    /// order. Read-only; fails only when every strategy misses.
    pub fn locate(&self, artifact: &Artifact) -> Result<Vec<u8>> {
        for candidate in self.candidate_paths(artifact) {
            if candidate.is_file() {
                // An unreadable candidate is skipped, not fatal; a later
                // strategy may still provide the artifact.
                if let Ok(bytes) = fs::read(&candidate) {
                    return Ok(bytes);
                }
            }
        }

        if let Some(bytes) = embedded_content(artifact)? {
            return Ok(bytes);
        }

        Err(SetupError::ResourceNotFound {
            name: artifact.logical_name.clone(),
        })
    }

    fn candidate_paths(&self, artifact: &Artifact) -> Vec<PathBuf> {
        let name = &artifact.logical_name;
        let mut candidates = Vec::new();

        if let Some(root) = &self.bundle_root {
            candidates.push(root.join(name));
        }

        if let Some(dir) = &self.exe_dir {
            candidates.push(dir.join(name));
            if artifact.is_binary {
                // Conventional sibling build output of a source checkout.
                candidates.push(dir.join("..").join("target").join("release").join(name));
            }
        }

        candidates.push(PathBuf::from(name));
        candidates
    }
}

fn embedded_content(artifact: &Artifact) -> Result<Option<Vec<u8>>> {
    let entry = EMBEDDED
        .iter()
        .find(|(name, _)| *name == artifact.logical_name);

    match entry {
        Some((_, Embedded::Text(text))) if !text.is_empty() => Ok(Some(text.as_bytes().to_vec())),
        Some((name, Embedded::Binary(encoded))) if !encoded.is_empty() => BASE64_STANDARD
            .decode(*encoded)
            .map(Some)
            .map_err(|e| SetupError::ExtractFailed {
                name: (*name).to_string(),
                reason: format!("invalid embedded payload: {e}"),
            }),
        _ => Ok(None),
    }
}
