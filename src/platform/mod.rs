//! Hosting platform services
//!
//! The report only needs one thing from the hosting service: closed pull
//! requests, most recently updated first. Pages are fetched lazily so a scan
//! that stops early never requests pages it does not need.

mod github;

pub use github::GitHubService;

use crate::error::{Error, Result};
use crate::types::{PullRequestSummary, RepoConfig};
use async_trait::async_trait;
use futures::{Stream, TryStreamExt, stream};

/// One page of closed pull requests
#[derive(Debug, Clone, Default)]
pub struct PullRequestPage {
    /// PRs on this page, in the order the platform returned them
    pub items: Vec<PullRequestSummary>,
    /// Whether the platform reported another page after this one
    pub has_next: bool,
}

/// Platform service trait for listing pull requests
///
/// Any hosting adapter that can produce [`PullRequestSummary`] values in
/// "closed, most recently updated first" order can back a report.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// List one page (1-based) of closed PRs sorted by update time, newest first
    async fn list_closed_pull_requests(&self, page: u32) -> Result<PullRequestPage>;

    /// Get the repository configuration
    fn config(&self) -> &RepoConfig;
}

/// Stream closed PRs across pages, requesting each page only when needed
///
/// The stream ends after the last page or at the first error.
pub fn closed_pull_requests(
    platform: &dyn PlatformService,
) -> impl Stream<Item = Result<PullRequestSummary>> + '_ {
    stream::try_unfold(Some(1_u32), move |page| async move {
        let Some(page) = page else {
            return Ok::<_, Error>(None);
        };
        let batch = platform.list_closed_pull_requests(page).await?;
        let next = batch.has_next.then_some(page + 1);
        let items = stream::iter(batch.items.into_iter().map(Ok::<_, Error>));
        Ok(Some((items, next)))
    })
    .try_flatten()
}

/// Create a platform service for the configured repository
pub fn create_platform_service(
    token: &str,
    config: &RepoConfig,
) -> Result<Box<dyn PlatformService>> {
    Ok(Box::new(GitHubService::new(token, config.clone())?))
}
