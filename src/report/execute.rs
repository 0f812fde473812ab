//! Report execution - effectful operations
//!
//! Runs the whole pipeline: fetch from the platform, classify, render, and
//! post through the messaging service.

use crate::error::Result;
use crate::messaging::MessagingService;
use crate::platform::PlatformService;
use crate::report::{classify_all, fetch_since_release, render_report};
use crate::types::{LabelNames, ReportOutcome};
use crate::trigger::DEFAULT_CHANNEL;
use tracing::{debug, info};

/// Options for a report run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Channel to post to
    pub channel: String,
    /// Labels that mark a PR approved or failed
    pub labels: LabelNames,
    /// Render only, do not post
    pub dry_run: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
            labels: LabelNames::default(),
            dry_run: false,
        }
    }
}

/// Build the QA report and post it (EFFECTFUL)
///
/// Makes exactly one messaging call unless `dry_run` is set. Platform and
/// messaging errors are returned as-is.
pub async fn run_report(
    platform: &dyn PlatformService,
    messaging: &dyn MessagingService,
    options: &ReportOptions,
) -> Result<ReportOutcome> {
    let scan = fetch_since_release(platform).await?;
    let release = scan.release;

    let buckets = classify_all(scan.pull_requests, &options.labels);
    debug!(
        approved = buckets.approved.len(),
        not_tested = buckets.not_tested.len(),
        failed = buckets.failed.len(),
        "classified PRs"
    );

    let text = render_report(&buckets, release.as_deref());

    if options.dry_run {
        debug!(channel = %options.channel, "dry run, not posting");
    } else {
        messaging.post_message(&options.channel, &text).await?;
        info!(
            channel = %options.channel,
            count = buckets.len(),
            "posted QA report"
        );
    }

    Ok(ReportOutcome {
        channel: options.channel.clone(),
        text,
        release,
        approved: buckets.approved.len(),
        not_tested: buckets.not_tested.len(),
        failed: buckets.failed.len(),
        posted: !options.dry_run,
    })
}
