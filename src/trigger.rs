//! Trigger payload
//!
//! Whatever starts a run (HTTP handler, scheduler, CLI) hands over a small
//! JSON object. Only `channel` is read; unknown fields are ignored.

use crate::error::{Error, Result};
use serde::Deserialize;

/// Channel used when the trigger does not name one
pub const DEFAULT_CHANNEL: &str = "#back";

/// JSON payload accepted from the trigger
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TriggerRequest {
    /// Slack channel to post to
    #[serde(default)]
    pub channel: Option<String>,
}

impl TriggerRequest {
    /// Parse a trigger payload
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid trigger payload: {e}")))
    }

    /// The requested channel, or [`DEFAULT_CHANNEL`]
    pub fn channel(&self) -> &str {
        self.channel
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CHANNEL)
    }

    /// Replace the payload's channel with an explicit one
    ///
    /// A missing or blank override leaves the payload's channel in place.
    #[must_use]
    pub fn with_channel_override(mut self, channel: Option<String>) -> Self {
        if let Some(channel) = channel.filter(|c| !c.trim().is_empty()) {
            self.channel = Some(channel);
        }
        self
    }
}
