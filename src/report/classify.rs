//! QA classification - pure functions

use crate::types::{ClassificationBuckets, LabelNames, PullRequestSummary, QaStatus};

/// Determine the QA status of a single PR
///
/// The approved label wins over the failed label; anything else, including
/// no labels at all, is not tested.
pub fn classify(pr: &PullRequestSummary, labels: &LabelNames) -> QaStatus {
    if pr.has_label(&labels.approved) {
        QaStatus::Approved
    } else if pr.has_label(&labels.failed) {
        QaStatus::Failed
    } else {
        QaStatus::NotTested
    }
}

/// Partition PRs into QA buckets, preserving input order within each bucket
pub fn classify_all<I>(prs: I, labels: &LabelNames) -> ClassificationBuckets
where
    I: IntoIterator<Item = PullRequestSummary>,
{
    let mut buckets = ClassificationBuckets::default();
    for pr in prs {
        let status = classify(&pr, labels);
        buckets.push(status, pr);
    }
    buckets
}
