//! Shared test fixtures

#![allow(dead_code)]

pub mod mock_platform;

pub use mock_platform::{MockMessagingService, MockPlatformService, PostMessageCall};

use qa_report::types::{PullRequestSummary, RepoConfig};

/// Repository used by all fixtures
pub fn repo_config() -> RepoConfig {
    RepoConfig {
        owner: "acme".to_string(),
        repo: "shop".to_string(),
        host: None,
    }
}

/// Build a PR with the given labels
pub fn make_pr(number: u64, title: &str, labels: &[&str]) -> PullRequestSummary {
    PullRequestSummary {
        number,
        title: title.to_string(),
        html_url: format!("https://github.com/acme/shop/pull/{number}"),
        labels: labels.iter().map(ToString::to_string).collect(),
    }
}
