//! Console delivery channel.

use async_trait::async_trait;

use crate::notify::channel::Channel;

/// Prints alerts to stdout. Mostly useful for local runs and as a
/// fallback alongside a chat channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleChannel;

impl ConsoleChannel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Channel for ConsoleChannel {
    fn kind(&self) -> &'static str {
        "console"
    }

    async fn send(&self, text: &str) {
        println!("{text}");
    }
}
