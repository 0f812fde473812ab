//! qa-report: QA status of pull requests merged since the last release
//!
//! Lists closed pull requests of a GitHub repository back to the most recent
//! release PR, buckets them by QA label, and posts the resulting report to a
//! Slack channel.

pub mod config;
pub mod error;
pub mod messaging;
pub mod platform;
pub mod report;
pub mod trigger;
pub mod types;
