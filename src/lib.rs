//! Watchdog: HTTP endpoint monitoring with debounced notifications.
//!
//! Probes a configured set of HTTP endpoints on independent schedules,
//! classifies each probe against accepted status codes, and emits
//! debounced failure/recovery alerts through pluggable delivery
//! channels. Per-entity fail counters are persisted so debouncing
//! survives process restarts.

pub mod config;
pub mod notify;
pub mod probe;
pub mod store;

pub use config::{load_config, AppConfig, ConfigError, MonitoredEntity};
pub use notify::{build_channels, DebounceEngine, Notifier};
pub use probe::Prober;
pub use store::{CounterStore, FileCounterStore, MemoryCounterStore};
