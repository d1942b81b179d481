//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! watchdog. All types derive Serde traits for deserialization from the
//! YAML config file.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the watchdog.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    /// Endpoints to monitor.
    #[serde(default)]
    pub entities: Vec<MonitoredEntity>,

    /// Notification channel specs.
    #[serde(default)]
    pub notifiers: Vec<ChannelSpec>,

    /// Directory for the persistent fail counters. Defaults to the
    /// directory containing the running binary when absent.
    #[serde(default)]
    pub storage_root: Option<PathBuf>,
}

/// A single monitored endpoint. Immutable after load.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MonitoredEntity {
    /// Unique identifier; also the counter key.
    pub name: String,

    /// URL probed with a GET each cycle.
    pub health_url: String,

    /// Time between probes (e.g. "30s", "2m").
    #[serde(with = "humantime_serde")]
    pub check_period: Duration,

    /// HTTP status codes accepted as healthy.
    pub valid_statuses: Vec<u16>,

    /// Consecutive failures tolerated before alerting. 0 means alert on
    /// the first failure.
    #[serde(default)]
    pub fails_allowed: u32,
}

impl MonitoredEntity {
    /// Whether a response status counts as healthy.
    pub fn status_ok(&self, status: u16) -> bool {
        self.valid_statuses.contains(&status)
    }
}

impl std::fmt::Display for MonitoredEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) checking every {}",
            self.name,
            self.health_url,
            humantime::format_duration(self.check_period)
        )?;
        if self.fails_allowed > 1 {
            write!(
                f,
                ". Won't notify unless {} fails happen in a row",
                self.fails_allowed
            )?;
        }
        Ok(())
    }
}

/// Notification channel spec: a kind tag plus kind-specific parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChannelSpec {
    /// Channel kind ("console", "telegram").
    pub kind: String,

    /// Kind-specific parameters (e.g. token, channel-id).
    #[serde(default)]
    pub params: HashMap<String, String>,
}
