//! Per-entity monitoring loop.
//!
//! One task per entity, living for the whole process: sleep the
//! configured period, probe, hand the observation to the notifier,
//! repeat. Workers share nothing with each other; the notifier and
//! prober are shared read-only.

use std::sync::Arc;

use tracing::info;

use crate::config::MonitoredEntity;
use crate::notify::Notifier;
use crate::probe::{Observation, Prober};

/// Run the probe loop for one entity. Never returns.
pub async fn monitor(entity: MonitoredEntity, notifier: Arc<Notifier>, prober: Prober) {
    info!("Monitoring {entity}");
    loop {
        tokio::time::sleep(entity.check_period).await;
        match prober.probe(&entity).await {
            Observation::Pass => notifier.success(&entity).await,
            Observation::Fail(detail) => notifier.fail(&entity, &detail).await,
        }
    }
}
