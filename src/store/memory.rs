//! In-memory counter store.
//!
//! Implements the same contract as the file store over a mutex-guarded
//! map. Used by tests that exercise the debounce engine without touching
//! the filesystem, and able to simulate store failures.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::store::{CounterStore, StoreError};

#[derive(Default)]
pub struct MemoryCounterStore {
    counters: Mutex<HashMap<String, u32>>,
    fail_writes: AtomicBool,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent increment/clear return an error, simulating
    /// a broken persistence layer.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn io_error(&self, name: &str, write: bool) -> StoreError {
        let source = std::io::Error::other("simulated store failure");
        if write {
            StoreError::Write {
                name: name.to_string(),
                source,
            }
        } else {
            StoreError::Remove {
                name: name.to_string(),
                source,
            }
        }
    }
}

impl CounterStore for MemoryCounterStore {
    fn exists(&self, name: &str) -> bool {
        self.counters.lock().unwrap().contains_key(name)
    }

    fn read(&self, name: &str) -> Option<u32> {
        self.counters.lock().unwrap().get(name).copied()
    }

    fn increment(&self, name: &str) -> Result<u32, StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(self.io_error(name, true));
        }
        let mut counters = self.counters.lock().unwrap();
        let count = counters.entry(name.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    fn clear(&self, name: &str) -> Result<u32, StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(self.io_error(name, false));
        }
        let prior = self.counters.lock().unwrap().remove(name);
        Ok(prior.unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_store_contract() {
        let store = MemoryCounterStore::new();
        assert!(!store.exists("api"));
        assert_eq!(store.increment("api").unwrap(), 1);
        assert_eq!(store.increment("api").unwrap(), 2);
        assert!(store.exists("api"));
        assert_eq!(store.read("api"), Some(2));
        assert_eq!(store.clear("api").unwrap(), 2);
        assert!(!store.exists("api"));
    }

    #[test]
    fn simulated_failures_surface_as_errors() {
        let store = MemoryCounterStore::new();
        store.increment("api").unwrap();

        store.fail_writes(true);
        assert!(store.increment("api").is_err());
        assert!(store.clear("api").is_err());

        store.fail_writes(false);
        assert_eq!(store.increment("api").unwrap(), 2);
    }
}
