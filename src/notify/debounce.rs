//! Debounce decision engine.
//!
//! # State Machine (per entity)
//! ```text
//! Healthy (no counter record) ←→ Degraded(n) (record = n ≥ 1)
//!
//! Fail:    Healthy     → Degraded(1),   alert iff fails_allowed == 0
//!          Degraded(n) → Degraded(n+1), alert iff n+1 == fails_allowed + 1
//! Success: Healthy     → Healthy,       never alerts
//!          Degraded(n) → Healthy,       alert iff n > fails_allowed
//! ```
//!
//! # Design Decisions
//! - Alerts fire exactly once per streak: on the first failure past the
//!   tolerance, and on recovery only if that failure alert had fired
//! - Store errors fail open: the observation alerts immediately and the
//!   error is carried up for self-reporting
//! - State lives entirely in the counter store, so a restarted process
//!   resumes mid-streak

use crate::store::{CounterStore, StoreError};

/// Outcome of feeding one observation through the engine.
#[derive(Debug)]
pub struct Verdict {
    /// Whether an alert should be broadcast for this observation.
    pub notify: bool,
    /// Store failure encountered while recording the observation, to be
    /// self-reported through the same channels as real alerts.
    pub store_error: Option<StoreError>,
}

impl Verdict {
    fn silent() -> Self {
        Self {
            notify: false,
            store_error: None,
        }
    }

    fn alert() -> Self {
        Self {
            notify: true,
            store_error: None,
        }
    }

    fn fail_open(err: StoreError) -> Self {
        Self {
            notify: true,
            store_error: Some(err),
        }
    }
}

/// Converts per-entity pass/fail observations into alert decisions,
/// backed by the durable counter store.
pub struct DebounceEngine {
    store: Box<dyn CounterStore>,
}

impl DebounceEngine {
    pub fn new(store: Box<dyn CounterStore>) -> Self {
        Self { store }
    }

    /// Record a failure observation.
    pub fn on_fail(&self, name: &str, fails_allowed: u32) -> Verdict {
        match self.store.increment(name) {
            // Alert exactly when the streak first exceeds the tolerance.
            Ok(count) if count == fails_allowed + 1 => Verdict::alert(),
            Ok(_) => Verdict::silent(),
            Err(err) => Verdict::fail_open(err),
        }
    }

    /// Record a success observation.
    pub fn on_success(&self, name: &str, fails_allowed: u32) -> Verdict {
        if !self.store.exists(name) {
            // Nothing to recover from.
            return Verdict::silent();
        }
        match self.store.clear(name) {
            // Recover alerts only for streaks that actually alerted.
            Ok(prior) if prior > fails_allowed => Verdict::alert(),
            Ok(_) => Verdict::silent(),
            Err(err) => Verdict::fail_open(err),
        }
    }
}
