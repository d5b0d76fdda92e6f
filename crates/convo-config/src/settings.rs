//! Application configuration schema.

use convo_common::{ConvoError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure, loaded once and read-only for the process
/// lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Discord bot configuration.
    pub bot: BotSettings,
    /// Local prompt data configuration.
    #[serde(default)]
    pub data: DataSettings,
    /// Upstream poll service configuration.
    #[serde(default)]
    pub upstream: UpstreamSettings,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSettings {
    /// Command prefix, e.g. `"+"`.
    pub prefix: String,
    /// Gateway auth token. Usually injected via `DISCORD_TOKEN`.
    #[serde(default)]
    pub token: String,
    /// Support server invite URL shown in the help embed.
    pub support_server: String,
    /// Presence statuses; one is chosen at random when the bot comes up.
    pub playing_statuses: Vec<String>,
}

/// Where the newline-delimited prompt lists live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Directory containing `truths.txt`, `dares.txt`, `nhie.txt`, `tot.txt`.
    pub dir: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}

/// Upstream poll service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamSettings {
    /// Request timeout in seconds for upstream poll fetches. Bounds a slow
    /// upstream so a stuck fetch cannot hold a handler open indefinitely.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
        }
    }
}

impl Settings {
    /// Validates the loaded configuration.
    ///
    /// Called once at startup, after environment overrides are applied.
    /// A failure here means the process does not start.
    pub fn validate(&self) -> Result<()> {
        if self.bot.prefix.is_empty() {
            return Err(ConvoError::config("bot.prefix cannot be empty"));
        }
        if self.bot.token.is_empty() {
            return Err(ConvoError::config(
                "bot.token is empty; set it in the config file or via DISCORD_TOKEN",
            ));
        }
        if self.bot.support_server.is_empty() {
            return Err(ConvoError::config("bot.support_server cannot be empty"));
        }
        if self.bot.playing_statuses.is_empty() {
            return Err(ConvoError::config(
                "bot.playing_statuses must contain at least one status",
            ));
        }
        if self.upstream.request_timeout_secs == 0 {
            return Err(ConvoError::config(
                "upstream.request_timeout_secs must be greater than 0",
            ));
        }
        Ok(())
    }
}
