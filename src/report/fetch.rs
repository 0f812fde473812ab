//! Release-bounded scan of closed pull requests

use crate::error::Result;
use crate::platform::{PlatformService, closed_pull_requests};
use crate::types::{PullRequestSummary, ReleaseScan};
use futures::{Stream, TryStreamExt};
use regex::Regex;
use std::pin::pin;
use std::sync::LazyLock;
use tracing::debug;

/// Release PR titles: `v1.2.3` or `v.1.2.3`
static RELEASE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v\.?[0-9]+\.[0-9]+\.[0-9]+$").expect("release title pattern is valid")
});

/// Whether a PR title names a release
pub fn is_release_title(title: &str) -> bool {
    RELEASE_TITLE.is_match(title)
}

/// Collect PRs until the first release PR
///
/// Consumes `pulls` once, in order, and stops pulling as soon as a release
/// title is seen. The release PR itself is not collected.
pub async fn scan_since_release<S>(pulls: S) -> Result<ReleaseScan>
where
    S: Stream<Item = Result<PullRequestSummary>>,
{
    let mut pulls = pin!(pulls);
    let mut scan = ReleaseScan::default();

    while let Some(pr) = pulls.try_next().await? {
        if is_release_title(&pr.title) {
            debug!(number = pr.number, title = %pr.title, "found previous release");
            scan.release = Some(pr.title);
            break;
        }
        debug!(number = pr.number, title = %pr.title, "collected PR");
        scan.pull_requests.push(pr);
    }

    Ok(scan)
}

/// Fetch closed PRs from the platform back to the last release
pub async fn fetch_since_release(platform: &dyn PlatformService) -> Result<ReleaseScan> {
    debug!(repo = %platform.config(), "scanning closed PRs since last release");
    let scan = scan_since_release(closed_pull_requests(platform)).await?;
    debug!(
        count = scan.pull_requests.len(),
        release = ?scan.release,
        "scan complete"
    );
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_title_accepts_optional_dot() {
        assert!(is_release_title("v1.2.3"));
        assert!(is_release_title("v.1.2.3"));
        assert!(is_release_title("v10.20.300"));
    }

    #[test]
    fn test_release_title_rejects_near_misses() {
        assert!(!is_release_title("1.2.3"));
        assert!(!is_release_title("v1.2"));
        assert!(!is_release_title("v1.2.3-rc1"));
        assert!(!is_release_title("Release v1.2.3"));
        assert!(!is_release_title("V1.2.3"));
        assert!(!is_release_title("v..1.2.3"));
        assert!(!is_release_title(""));
    }
}
