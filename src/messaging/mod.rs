//! Messaging services
//!
//! Delivers the rendered report to a chat channel.

mod slack;

pub use slack::SlackService;

use crate::error::Result;
use async_trait::async_trait;

/// Messaging service trait for posting a report
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// Post `text` to `channel`
    async fn post_message(&self, channel: &str, text: &str) -> Result<()>;
}
