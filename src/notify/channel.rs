//! Delivery channel trait and config-driven construction.

use async_trait::async_trait;

use crate::config::{ChannelSpec, ConfigError};
use crate::notify::console::ConsoleChannel;
use crate::notify::telegram::TelegramChannel;

/// A best-effort text delivery capability.
///
/// `send` must never propagate errors to the caller; delivery problems
/// are logged by the channel itself. Implementations must tolerate
/// concurrent calls.
#[async_trait]
pub trait Channel: Send + Sync + std::fmt::Debug {
    /// Channel kind, for logs.
    fn kind(&self) -> &'static str;

    /// Deliver one message, fire-and-forget.
    async fn send(&self, text: &str);
}

/// Resolve channel specs into concrete channels.
///
/// The set of kinds is closed; an unknown kind is a fatal configuration
/// error, as is a known kind missing a required parameter.
pub fn build_channels(specs: &[ChannelSpec]) -> Result<Vec<Box<dyn Channel>>, ConfigError> {
    let mut channels: Vec<Box<dyn Channel>> = Vec::with_capacity(specs.len());

    for spec in specs {
        match spec.kind.to_lowercase().as_str() {
            "console" => channels.push(Box::new(ConsoleChannel::new())),
            "telegram" => channels.push(Box::new(TelegramChannel::from_params(&spec.params)?)),
            _ => return Err(ConfigError::UnsupportedChannel(spec.kind.clone())),
        }
    }

    Ok(channels)
}
