//! Slack messaging service implementation

use crate::error::{Error, Result};
use crate::messaging::MessagingService;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Public Slack Web API base
const DEFAULT_API_BASE: &str = "https://slack.com/api";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
struct PostMessagePayload<'a> {
    channel: &'a str,
    text: &'a str,
}

/// Envelope every Slack Web API method answers with
#[derive(Deserialize)]
struct SlackResponse {
    ok: bool,
    error: Option<String>,
    ts: Option<String>,
}

/// Slack service using reqwest
pub struct SlackService {
    client: Client,
    token: String,
    api_base: String,
}

impl SlackService {
    /// Create a new Slack service against the public API
    pub fn new(token: String) -> Result<Self> {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Create a Slack service against a custom API base URL
    pub fn with_api_base(token: String, api_base: &str) -> Result<Self> {
        let parsed = Url::parse(api_base)
            .map_err(|e| Error::Config(format!("invalid Slack API URL '{api_base}': {e}")))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Slack(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token,
            api_base: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_base)
    }
}

#[async_trait]
impl MessagingService for SlackService {
    async fn post_message(&self, channel: &str, text: &str) -> Result<()> {
        debug!(channel, len = text.len(), "posting Slack message");

        let response: SlackResponse = self
            .client
            .post(self.api_url("chat.postMessage"))
            .bearer_auth(&self.token)
            .json(&PostMessagePayload { channel, text })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.ok {
            return Err(Error::Slack(
                response
                    .error
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        debug!(channel, ts = ?response.ts, "posted Slack message");
        Ok(())
    }
}
