//! Core types for qa-report

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default label marking a pull request as tested and approved
pub const DEFAULT_APPROVED_LABEL: &str = "Tested and Approved";

/// Default label marking a pull request as tested and failed
pub const DEFAULT_FAILED_LABEL: &str = "Tested and Failed";

/// A closed pull request, reduced to what the report needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestSummary {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Web URL for the PR
    pub html_url: String,
    /// Label names attached to the PR (order is not significant)
    pub labels: Vec<String>,
}

impl PullRequestSummary {
    /// Whether the PR carries a label with exactly this name
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }
}

/// QA status of a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QaStatus {
    /// Tested and ready for the next release
    Approved,
    /// Waiting for QA
    NotTested,
    /// Tested, does not work as intended
    Failed,
}

impl QaStatus {
    /// All statuses, in report order
    pub const ALL: [Self; 3] = [Self::Approved, Self::NotTested, Self::Failed];

    /// Slack emoji shown next to PRs with this status
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Approved => ":heavy_check_mark:",
            Self::NotTested => ":white_check_mark:",
            Self::Failed => ":heavy_multiplication_x:",
        }
    }
}

impl std::fmt::Display for QaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::NotTested => write!(f, "not tested"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Pull requests partitioned by QA status
///
/// Each bucket keeps the order in which PRs were scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationBuckets {
    /// PRs labelled as approved
    pub approved: Vec<PullRequestSummary>,
    /// PRs without a recognized QA label
    pub not_tested: Vec<PullRequestSummary>,
    /// PRs labelled as failed
    pub failed: Vec<PullRequestSummary>,
}

impl ClassificationBuckets {
    /// Bucket for a status
    pub fn bucket(&self, status: QaStatus) -> &[PullRequestSummary] {
        match status {
            QaStatus::Approved => &self.approved,
            QaStatus::NotTested => &self.not_tested,
            QaStatus::Failed => &self.failed,
        }
    }

    /// Append a PR to the bucket for `status`
    pub fn push(&mut self, status: QaStatus, pr: PullRequestSummary) {
        match status {
            QaStatus::Approved => self.approved.push(pr),
            QaStatus::NotTested => self.not_tested.push(pr),
            QaStatus::Failed => self.failed.push(pr),
        }
    }

    /// Total number of PRs across all buckets
    pub fn len(&self) -> usize {
        self.approved.len() + self.not_tested.len() + self.failed.len()
    }

    /// Whether all buckets are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of scanning closed PRs back to the previous release
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseScan {
    /// PRs closed since the last release (newest first)
    pub pull_requests: Vec<PullRequestSummary>,
    /// Title of the release PR that bounded the scan, if one was found
    pub release: Option<String>,
}

/// Label names that drive classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelNames {
    /// Label meaning "tested and approved"
    pub approved: String,
    /// Label meaning "tested and failed"
    pub failed: String,
}

impl Default for LabelNames {
    fn default() -> Self {
        Self {
            approved: DEFAULT_APPROVED_LABEL.to_string(),
            failed: DEFAULT_FAILED_LABEL.to_string(),
        }
    }
}

/// Repository the report is generated for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

impl RepoConfig {
    /// Parse an `owner/name` identifier
    pub fn parse(slug: &str) -> Result<Self> {
        match slug.trim().split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                    host: None,
                })
            }
            _ => Err(Error::Config(format!(
                "repository must be in format 'owner/repo', got: '{slug}'"
            ))),
        }
    }

    /// Set a GitHub Enterprise host
    #[must_use]
    pub fn with_host(mut self, host: Option<String>) -> Self {
        self.host = host;
        self
    }
}

impl std::fmt::Display for RepoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// What a report run produced and where it went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    /// Channel the report was addressed to
    pub channel: String,
    /// Rendered report text
    pub text: String,
    /// Release marker bounding the report
    pub release: Option<String>,
    /// Number of approved PRs
    pub approved: usize,
    /// Number of untested PRs
    pub not_tested: usize,
    /// Number of failed PRs
    pub failed: usize,
    /// Whether the report was actually posted
    pub posted: bool,
}
