//! Process configuration, read once from the environment

use crate::error::{Error, Result};
use crate::types::RepoConfig;

/// Environment variables holding the GitHub token, in lookup order
pub const GITHUB_TOKEN_VARS: [&str; 3] = ["GIT_HUB_TOKEN", "GITHUB_TOKEN", "GH_TOKEN"];

/// Environment variable holding the Slack bot token
pub const SLACK_TOKEN_VAR: &str = "SLACK_API_TOKEN";

/// Environment variable holding the `owner/name` repository identifier
pub const REPOSITORY_VAR: &str = "REPOSITORY";

/// Environment variable holding an optional GitHub Enterprise host
pub const GITHUB_HOST_VAR: &str = "GITHUB_HOST";

/// Credentials and target repository for a report run
#[derive(Clone)]
pub struct ReportConfig {
    /// GitHub access token
    pub github_token: String,
    /// Slack access token
    pub slack_token: String,
    /// Repository to report on
    pub repository: RepoConfig,
}

impl std::fmt::Debug for ReportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportConfig")
            .field("github_token", &"<redacted>")
            .field("slack_token", &"<redacted>")
            .field("repository", &self.repository)
            .finish()
    }
}

impl ReportConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let github_token = GITHUB_TOKEN_VARS
            .iter()
            .find_map(|&name| get(name))
            .ok_or_else(|| {
                Error::Config(format!(
                    "no GitHub token found, set one of {}",
                    GITHUB_TOKEN_VARS.join(", ")
                ))
            })?;

        let slack_token = get(SLACK_TOKEN_VAR)
            .ok_or_else(|| Error::Config(format!("{SLACK_TOKEN_VAR} is not set")))?;

        let slug =
            get(REPOSITORY_VAR).ok_or_else(|| Error::Config(format!("{REPOSITORY_VAR} is not set")))?;
        let repository = RepoConfig::parse(&slug)?.with_host(get(GITHUB_HOST_VAR));

        Ok(Self {
            github_token,
            slack_token,
            repository,
        })
    }
}
