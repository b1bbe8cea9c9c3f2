//! System search-path mutation
//!
//! Read-modify-write edits of the shared search-path value. Only segments
//! exactly equal to the target directory are touched; unrelated entries keep
//! their order, their duplicates, and any empty segments. After a write the
//! change is broadcast to other processes, best-effort and bounded.

use std::path::Path;

use crate::error::Result;
use crate::system::{BROADCAST_TIMEOUT, PathStore};

/// Ensure `dir` is registered on the system search path.
///
/// Returns true when the directory is present afterwards, whether appended
/// by this call or already there. Already-present entries are left alone, so
/// re-running install never duplicates the entry.
pub fn add_entry(store: &dyn PathStore, dir: &Path) -> Result<bool> {
    let entry = dir.display().to_string();
    let delimiter = store.delimiter();
    let current = store.read()?;

    if current.split(delimiter).any(|segment| segment == entry) {
        return Ok(true);
    }

    let updated = if current.is_empty() {
        entry
    } else {
        format!("{current}{delimiter}{entry}")
    };
    store.write(&updated)?;
    broadcast(store);
    Ok(true)
}

/// Drop every segment exactly equal to `dir` from the system search path.
///
/// Returns true on a successful write, even when no segment matched.
pub fn remove_entry(store: &dyn PathStore, dir: &Path) -> Result<bool> {
    let entry = dir.display().to_string();
    let delimiter = store.delimiter();
    let current = store.read()?;

    let kept: Vec<&str> = current
        .split(delimiter)
        .filter(|segment| *segment != entry)
        .collect();
    let updated = kept.join(&delimiter.to_string());

    store.write(&updated)?;
    broadcast(store);
    Ok(true)
}

fn broadcast(store: &dyn PathStore) {
    if !store.notify_changed(BROADCAST_TIMEOUT) {
        eprintln!("Warning: environment change broadcast was not acknowledged");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::test_fixtures::FakePathStore;

    #[test]
    fn test_add_entry_appends() {
        let store = FakePathStore::with_value("C:\\A;C:\\B");
        assert!(add_entry(&store, Path::new("C:\\Target")).unwrap());
        assert_eq!(store.value(), "C:\\A;C:\\B;C:\\Target");
        assert_eq!(store.broadcasts(), 1);
    }

    #[test]
    fn test_add_entry_is_idempotent() {
        let store = FakePathStore::with_value("C:\\A");
        add_entry(&store, Path::new("C:\\Target")).unwrap();
        add_entry(&store, Path::new("C:\\Target")).unwrap();
        assert_eq!(store.value(), "C:\\A;C:\\Target");
        // Second call saw the entry and wrote nothing.
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_add_entry_to_empty_value() {
        let store = FakePathStore::with_value("");
        add_entry(&store, Path::new("C:\\Target")).unwrap();
        assert_eq!(store.value(), "C:\\Target");
    }

    #[test]
    fn test_remove_entry_preserves_unrelated_entries() {
        let store = FakePathStore::with_value("C:\\A;C:\\B;C:\\Target");
        assert!(remove_entry(&store, Path::new("C:\\Target")).unwrap());
        assert_eq!(store.value(), "C:\\A;C:\\B");
    }

    #[test]
    fn test_remove_entry_drops_every_occurrence() {
        let store = FakePathStore::with_value("C:\\Target;C:\\A;C:\\Target;C:\\B;C:\\Target");
        remove_entry(&store, Path::new("C:\\Target")).unwrap();
        assert_eq!(store.value(), "C:\\A;C:\\B");
    }

    #[test]
    fn test_remove_entry_keeps_unrelated_duplicates_and_empty_segments() {
        let store = FakePathStore::with_value("C:\\A;;C:\\A;C:\\Target");
        remove_entry(&store, Path::new("C:\\Target")).unwrap();
        assert_eq!(store.value(), "C:\\A;;C:\\A");
    }

    #[test]
    fn test_remove_entry_ignores_partial_matches() {
        let store = FakePathStore::with_value("C:\\Target\\sub;C:\\Target");
        remove_entry(&store, Path::new("C:\\Target")).unwrap();
        assert_eq!(store.value(), "C:\\Target\\sub");
    }

    #[test]
    fn test_read_failure_propagates() {
        let store = FakePathStore::failing();
        let result = add_entry(&store, Path::new("C:\\Target"));
        assert!(matches!(
            result,
            Err(SetupError::PathStoreUnavailable { .. })
        ));
    }

    #[test]
    fn test_broadcast_timeout_is_not_an_error() {
        let store = FakePathStore::with_value("C:\\A").broadcast_hangs();
        assert!(add_entry(&store, Path::new("C:\\Target")).unwrap());
        assert_eq!(store.value(), "C:\\A;C:\\Target");
    }
}
