//! File-backed counter store.
//!
//! One file per entity under the storage root. The file name is the hex
//! SHA-256 digest of the entity name, so arbitrary entity names never
//! produce invalid paths and restarts reattach to existing state. The
//! content is a single ASCII decimal integer, rewritten whole on every
//! increment.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::warn;

use crate::store::{CounterStore, StoreError};

pub struct FileCounterStore {
    root: PathBuf,
}

impl FileCounterStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store rooted at the running binary's directory, the
    /// default when no storage root is configured.
    pub fn beside_executable() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Self::new(dir))
    }

    fn path_for(&self, name: &str) -> PathBuf {
        let digest = Sha256::digest(name.as_bytes());
        self.root.join(hex::encode(digest))
    }

    fn read_at(&self, path: &Path, name: &str) -> Option<u32> {
        let content = fs::read_to_string(path).ok()?;
        match content.trim().parse::<u32>() {
            Ok(n) => Some(n),
            Err(_) => {
                warn!(entity = %name, path = %path.display(), "unparsable counter content");
                None
            }
        }
    }
}

impl CounterStore for FileCounterStore {
    fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    fn read(&self, name: &str) -> Option<u32> {
        let path = self.path_for(name);
        if !path.exists() {
            return None;
        }
        self.read_at(&path, name)
    }

    fn increment(&self, name: &str) -> Result<u32, StoreError> {
        let path = self.path_for(name);
        let next = if path.exists() {
            // A corrupt value counts as 1, not a hard failure.
            self.read_at(&path, name).unwrap_or(1) + 1
        } else {
            1
        };
        fs::write(&path, next.to_string()).map_err(|source| StoreError::Write {
            name: name.to_string(),
            source,
        })?;
        Ok(next)
    }

    fn clear(&self, name: &str) -> Result<u32, StoreError> {
        let path = self.path_for(name);
        // Best-effort read; an unreadable value must not hide a recovery.
        let prior = self.read_at(&path, name).unwrap_or(u32::MAX);
        fs::remove_file(&path).map_err(|source| StoreError::Remove {
            name: name.to_string(),
            source,
        })?;
        Ok(prior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, FileCounterStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCounterStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn absent_until_first_increment() {
        let (_dir, store) = store();
        assert!(!store.exists("api"));
        assert_eq!(store.read("api"), None);

        assert_eq!(store.increment("api").unwrap(), 1);
        assert!(store.exists("api"));
        assert_eq!(store.read("api"), Some(1));
    }

    #[test]
    fn increments_run_consecutively() {
        let (_dir, store) = store();
        for expected in 1..=4 {
            assert_eq!(store.increment("api").unwrap(), expected);
        }
        assert_eq!(store.read("api"), Some(4));
    }

    #[test]
    fn clear_returns_prior_and_removes() {
        let (_dir, store) = store();
        store.increment("api").unwrap();
        store.increment("api").unwrap();

        assert_eq!(store.clear("api").unwrap(), 2);
        assert!(!store.exists("api"));
    }

    #[test]
    fn clear_on_absent_record_errors() {
        let (_dir, store) = store();
        assert!(store.clear("api").is_err());
    }

    #[test]
    fn entities_are_partitioned() {
        let (_dir, store) = store();
        store.increment("a").unwrap();
        store.increment("a").unwrap();
        store.increment("b").unwrap();

        assert_eq!(store.read("a"), Some(2));
        assert_eq!(store.read("b"), Some(1));
        store.clear("a").unwrap();
        assert_eq!(store.read("b"), Some(1));
    }

    #[test]
    fn reattaches_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileCounterStore::new(dir.path());
            store.increment("api").unwrap();
            store.increment("api").unwrap();
        }
        // A fresh instance over the same root sees the same streak.
        let store = FileCounterStore::new(dir.path());
        assert_eq!(store.read("api"), Some(2));
        assert_eq!(store.increment("api").unwrap(), 3);
    }

    #[test]
    fn corrupt_content_counts_as_one_on_increment() {
        let (_dir, store) = store();
        store.increment("api").unwrap();
        fs::write(store.path_for("api"), "not a number").unwrap();

        assert_eq!(store.read("api"), None);
        assert_eq!(store.increment("api").unwrap(), 2);
    }

    #[test]
    fn corrupt_content_clears_to_sentinel() {
        let (_dir, store) = store();
        store.increment("api").unwrap();
        fs::write(store.path_for("api"), "garbage").unwrap();

        assert_eq!(store.clear("api").unwrap(), u32::MAX);
        assert!(!store.exists("api"));
    }

    #[test]
    fn key_is_filesystem_safe() {
        let (dir, store) = store();
        store.increment("svc with spaces / and ../ tricks").unwrap();

        // Exactly one file, directly under the root, hex-named.
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn unwritable_root_reports_write_error() {
        let store = FileCounterStore::new("/nonexistent/watchdog-store");
        let err = store.increment("api").unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
