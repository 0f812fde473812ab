//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::{PlatformService, PullRequestPage};
use crate::types::{PullRequestSummary, RepoConfig};
use async_trait::async_trait;
use octocrab::Octocrab;
use octocrab::params::{Direction, State, pulls::Sort};
use tracing::debug;

/// Largest page size the pulls endpoint accepts
const PAGE_SIZE: u8 = 100;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: RepoConfig,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// Talks to api.github.com, or to `https://{host}/api/v3` when the
    /// repository names an enterprise host.
    pub fn new(token: &str, config: RepoConfig) -> Result<Self> {
        let base_uri = config.host.as_ref().map(|h| format!("https://{h}/api/v3"));
        Self::build(token, config, base_uri.as_deref())
    }

    /// Create a GitHub service against an explicit API base URI
    pub fn with_base_uri(token: &str, config: RepoConfig, base_uri: &str) -> Result<Self> {
        Self::build(token, config, Some(base_uri))
    }

    fn build(token: &str, config: RepoConfig, base_uri: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(base_uri) = base_uri {
            builder = builder
                .base_uri(base_uri)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, config })
    }
}

/// Convert an octocrab PR into a summary
///
/// The list endpoint always sends a title and web URL; a PR without them is
/// treated as a malformed response.
fn summary_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> Result<PullRequestSummary> {
    let title = pr
        .title
        .clone()
        .ok_or_else(|| Error::GitHubApi(format!("PR #{} has no title", pr.number)))?;
    let html_url = pr
        .html_url
        .as_ref()
        .map(ToString::to_string)
        .ok_or_else(|| Error::GitHubApi(format!("PR #{} has no html_url", pr.number)))?;
    let labels = pr
        .labels
        .as_ref()
        .map(|labels| labels.iter().map(|l| l.name.clone()).collect())
        .unwrap_or_default();

    Ok(PullRequestSummary {
        number: pr.number,
        title,
        html_url,
        labels,
    })
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn list_closed_pull_requests(&self, page: u32) -> Result<PullRequestPage> {
        debug!(repo = %self.config, page, "listing closed PRs");
        let result = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(State::Closed)
            .sort(Sort::Updated)
            .direction(Direction::Descending)
            .per_page(PAGE_SIZE)
            .page(page)
            .send()
            .await?;

        let items = result
            .items
            .iter()
            .map(summary_from_octocrab)
            .collect::<Result<Vec<_>>>()?;
        let has_next = result.next.is_some();

        debug!(page, count = items.len(), has_next, "listed closed PRs");
        Ok(PullRequestPage { items, has_next })
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
