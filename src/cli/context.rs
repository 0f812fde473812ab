//! Shared command context
//!
//! Builds the collaborator services once from process configuration.

use qa_report::config::ReportConfig;
use qa_report::error::Result;
use qa_report::messaging::{MessagingService, SlackService};
use qa_report::platform::{PlatformService, create_platform_service};

/// Services a report run talks to
pub struct CommandContext {
    /// Hosting platform (GitHub)
    pub platform: Box<dyn PlatformService>,
    /// Messaging service (Slack)
    pub messaging: Box<dyn MessagingService>,
}

impl CommandContext {
    /// Create the services described by `config`
    pub fn new(config: &ReportConfig) -> Result<Self> {
        let platform = create_platform_service(&config.github_token, &config.repository)?;
        let messaging = Box::new(SlackService::new(config.slack_token.clone())?);

        Ok(Self {
            platform,
            messaging,
        })
    }
}
