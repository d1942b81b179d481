//! Persistent fail counter store.
//!
//! # Data Flow
//! ```text
//! Debounce engine (notify/debounce.rs):
//!     Fail observation   → increment(name)
//!     Success observation → exists(name)? clear(name)
//!
//! file.rs: one file per entity under the storage root,
//!     named by a SHA-256 digest of the entity name,
//!     holding a single ASCII decimal integer
//! memory.rs: HashMap-backed store for tests
//! ```
//!
//! # Design Decisions
//! - Absence of a record is the signal for "healthy, no active streak"
//! - Counter files survive restarts, so debouncing does too
//! - Store errors are returned, never panicked on; the engine fails open

pub mod file;
pub mod memory;

use thiserror::Error;

pub use file::FileCounterStore;
pub use memory::MemoryCounterStore;

/// Error raised by counter store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write counter for '{name}': {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove counter for '{name}': {source}")]
    Remove {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Durable per-entity consecutive-failure counter.
///
/// Keys are entity names. A missing record means the entity has no active
/// failure streak; a present record holds the streak length.
pub trait CounterStore: Send + Sync {
    /// Whether a counter record exists for the entity.
    fn exists(&self, name: &str) -> bool;

    /// Current counter value, if a readable record exists.
    fn read(&self, name: &str) -> Option<u32>;

    /// Create the record with value 1, or bump an existing one, returning
    /// the new value. An existing record with unreadable content counts
    /// as 1, so the write stores 2.
    fn increment(&self, name: &str) -> Result<u32, StoreError>;

    /// Delete the record, returning the value it held. An unreadable
    /// value defaults to `u32::MAX` so a recovery that follows it is
    /// surfaced rather than suppressed.
    fn clear(&self, name: &str) -> Result<u32, StoreError>;
}

impl<T: CounterStore + ?Sized> CounterStore for std::sync::Arc<T> {
    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn read(&self, name: &str) -> Option<u32> {
        (**self).read(name)
    }

    fn increment(&self, name: &str) -> Result<u32, StoreError> {
        (**self).increment(name)
    }

    fn clear(&self, name: &str) -> Result<u32, StoreError> {
        (**self).clear(name)
    }
}
