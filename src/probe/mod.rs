//! HTTP health probing.
//!
//! # Responsibilities
//! - Issue one GET per cycle against each entity's health URL
//! - Classify the outcome against the entity's accepted status codes
//! - Bound every request with a fixed timeout so a hung endpoint
//!   surfaces as a failure observation instead of stalling the worker
//!
//! # Design Decisions
//! - Transport errors, timeouts and bad status codes all collapse into
//!   the same failure observation; the decision engine never sees the
//!   difference
//! - Failure detail is free text: the error message, or "status: body"
//!   with the body truncated for the alert message

pub mod worker;

use std::time::Duration;

use crate::config::MonitoredEntity;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);
const MAX_BODY_DETAIL: usize = 256;

/// Outcome of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// The endpoint answered with an accepted status.
    Pass,
    /// Anything else, with diagnostic text for the alert.
    Fail(String),
}

#[derive(Clone)]
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Probe one entity once.
    pub async fn probe(&self, entity: &MonitoredEntity) -> Observation {
        match self.client.get(&entity.health_url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                if entity.status_ok(status) {
                    Observation::Pass
                } else {
                    let body = response.text().await.unwrap_or_default();
                    Observation::Fail(format!("{}: {}", status, truncate(&body)))
                }
            }
            Err(error) => Observation::Fail(error.to_string()),
        }
    }
}

fn truncate(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_BODY_DETAIL {
        trimmed.to_string()
    } else {
        let mut cut: String = trimmed.chars().take(MAX_BODY_DETAIL).collect();
        cut.push('…');
        cut
    }
}
