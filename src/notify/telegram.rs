//! Telegram delivery channel.
//!
//! Sends alerts through the Bot API `sendMessage` endpoint. Construction
//! fails without a token and channel id; delivery failures are logged and
//! swallowed so a flaky Telegram outage never disturbs the probe loops.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::config::ConfigError;
use crate::notify::channel::Channel;

const TOKEN_PARAM: &str = "token";
const CHANNEL_ID_PARAM: &str = "channel-id";
const API_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct TelegramChannel {
    token: String,
    channel_id: String,
    client: reqwest::Client,
}

impl TelegramChannel {
    /// Build from config params; `token` and `channel-id` are required
    /// and must be non-empty.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let token = require(params, TOKEN_PARAM)?;
        let channel_id = require(params, CHANNEL_ID_PARAM)?;

        let client = reqwest::Client::builder()
            .timeout(API_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::ChannelInit {
                kind: "telegram",
                message: e.to_string(),
            })?;

        Ok(Self {
            token,
            channel_id,
            client,
        })
    }
}

fn require(params: &HashMap<String, String>, param: &'static str) -> Result<String, ConfigError> {
    match params.get(param) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => Err(ConfigError::MissingChannelParam {
            kind: "telegram",
            param,
        }),
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    fn kind(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, text: &str) {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);
        let result = self
            .client
            .get(&url)
            .query(&[("chat_id", self.channel_id.as_str()), ("text", text)])
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    // The API explains rejections in the body.
                    let description = response
                        .json::<Value>()
                        .await
                        .ok()
                        .and_then(|v| v["description"].as_str().map(str::to_string))
                        .unwrap_or_default();
                    warn!(%status, %description, "telegram rejected message");
                }
            }
            Err(error) => {
                warn!(%error, "telegram delivery failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn builds_with_both_params() {
        let channel =
            TelegramChannel::from_params(&params(&[("token", "t"), ("channel-id", "c")])).unwrap();
        assert_eq!(channel.kind(), "telegram");
        assert_eq!(channel.token, "t");
        assert_eq!(channel.channel_id, "c");
    }

    #[test]
    fn missing_token_is_config_error() {
        let err = TelegramChannel::from_params(&params(&[("channel-id", "c")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingChannelParam { param: "token", .. }
        ));
    }

    #[test]
    fn empty_token_is_config_error() {
        let err = TelegramChannel::from_params(&params(&[("token", ""), ("channel-id", "c")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingChannelParam { param: "token", .. }
        ));
    }

    #[test]
    fn missing_channel_id_is_config_error() {
        let err = TelegramChannel::from_params(&params(&[("token", "t")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingChannelParam {
                param: "channel-id",
                ..
            }
        ));
    }
}
