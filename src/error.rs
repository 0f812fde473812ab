//! Error types for qa-report

use thiserror::Error;

/// Errors raised while building or delivering a QA report
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration (environment or trigger payload)
    #[error("configuration error: {0}")]
    Config(String),

    /// GitHub API returned an error or an unexpected response shape
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Error surfaced by octocrab
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// Slack API accepted the request but reported a failure
    #[error("Slack API error: {0}")]
    Slack(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic collaborator failure
    #[error("platform error: {0}")]
    Platform(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
