//! Notification orchestrator.
//!
//! # Responsibilities
//! - Run fail/success observations through the debounce engine
//! - Format alert messages
//! - Fan out to every delivery channel, best-effort
//! - Self-report counter store failures on those same channels
//!
//! # Design Decisions
//! - Channels are called independently: one channel's failure never
//!   blocks or suppresses delivery to the others
//! - Delivery is never retried and never escalated; an alert counts as
//!   attempted even if every channel failed
//! - Store errors reach operators through the alert channels themselves,
//!   so a broken persistence layer is as visible as a down endpoint

use tracing::{debug, error, info};

use crate::config::{ConfigError, MonitoredEntity};
use crate::notify::channel::Channel;
use crate::notify::debounce::{DebounceEngine, Verdict};

pub struct Notifier {
    channels: Vec<Box<dyn Channel>>,
    engine: DebounceEngine,
}

impl Notifier {
    pub fn new(channels: Vec<Box<dyn Channel>>, engine: DebounceEngine) -> Self {
        Self { channels, engine }
    }

    /// Reject an empty channel set. Called once at startup, before any
    /// observation traffic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channels.is_empty() {
            return Err(ConfigError::NoChannels);
        }
        Ok(())
    }

    /// Record a failed probe. `detail` is opaque diagnostic text from the
    /// prober (error message, or "status: body").
    pub async fn fail(&self, entity: &MonitoredEntity, detail: &str) {
        let verdict = self.engine.on_fail(&entity.name, entity.fails_allowed);
        self.report_store_error(&entity.name, &verdict).await;
        if verdict.notify {
            info!(entity = %entity.name, detail, "failure alert");
            self.broadcast(&format!("❌ {} fail: {}", entity.name, detail))
                .await;
        } else {
            debug!(entity = %entity.name, detail, "failure observed, withheld");
        }
    }

    /// Record a successful probe.
    pub async fn success(&self, entity: &MonitoredEntity) {
        let verdict = self.engine.on_success(&entity.name, entity.fails_allowed);
        self.report_store_error(&entity.name, &verdict).await;
        if verdict.notify {
            info!(entity = %entity.name, "recovery alert");
            self.broadcast(&format!("✅ {} recover", entity.name)).await;
        }
    }

    async fn report_store_error(&self, name: &str, verdict: &Verdict) {
        if let Some(err) = &verdict.store_error {
            error!(entity = %name, error = %err, "counter store failure");
            self.broadcast(&format!("⚠️ {name}: counter store failure: {err}"))
                .await;
        }
    }

    async fn broadcast(&self, text: &str) {
        for channel in &self.channels {
            // Channels self-log failures and never return errors, so a
            // dead channel cannot stop the rest of the fan-out.
            channel.send(text).await;
        }
    }
}
