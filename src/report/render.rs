//! Report rendering - pure functions

use crate::types::{ClassificationBuckets, PullRequestSummary, QaStatus};
use std::fmt::Write;

/// Line written after each non-empty bucket
pub const SEPARATOR: &str = "--------------------------------";

/// Shown in place of the release title when no release PR was found
pub const NO_RELEASE_PLACEHOLDER: &str = "(none found)";

/// Slack link markup for a PR: `<url|#number>`
fn short_link(pr: &PullRequestSummary) -> String {
    format!("<{}|#{}>", pr.html_url, pr.number)
}

/// Escape the characters Slack treats as markup: `&`, `<` and `>`
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the report text
///
/// Output depends only on the arguments, so the same buckets and release
/// always render the same bytes. PR and release titles are escaped so they
/// cannot break the link markup.
pub fn render_report(buckets: &ClassificationBuckets, release: Option<&str>) -> String {
    let mut text = String::new();

    let _ = writeln!(
        text,
        "From the Last Release: {}",
        release.map_or_else(|| NO_RELEASE_PLACEHOLDER.to_string(), escape_text)
    );
    text.push_str("Prs in QA:\n");

    for status in QaStatus::ALL {
        let prs = buckets.bucket(status);
        if prs.is_empty() {
            continue;
        }
        for pr in prs {
            let _ = writeln!(
                text,
                "-[{}] {}: {}",
                status.icon(),
                escape_text(&pr.title),
                short_link(pr)
            );
        }
        text.push_str(SEPARATOR);
        text.push('\n');
    }

    let _ = writeln!(
        text,
        "[{}] In QA, need to be tested",
        QaStatus::NotTested.icon()
    );
    let _ = writeln!(
        text,
        "[{}] In QA, Tested and ready to be in the next release",
        QaStatus::Approved.icon()
    );
    let _ = write!(
        text,
        "[{}] In QA, Tested but doesn't work as intended",
        QaStatus::Failed.icon()
    );

    text
}
