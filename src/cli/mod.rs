//! Command-line trigger for qa-report

mod context;
mod report;
mod style;

pub use report::{RunOptions, run};

use clap::Parser;
use qa_report::types::{DEFAULT_APPROVED_LABEL, DEFAULT_FAILED_LABEL};

/// Post the QA status of pull requests merged since the last release to Slack
#[derive(Debug, Parser)]
#[command(name = "qa-report", version, about)]
pub struct Cli {
    /// Slack channel to post to (overrides the request payload)
    #[arg(short, long)]
    pub channel: Option<String>,

    /// Trigger payload as JSON, e.g. '{"channel": "#qa"}'
    #[arg(long, value_name = "JSON")]
    pub request: Option<String>,

    /// Label marking a PR as tested and approved
    #[arg(long, default_value = DEFAULT_APPROVED_LABEL)]
    pub approved_label: String,

    /// Label marking a PR as tested and failed
    #[arg(long, default_value = DEFAULT_FAILED_LABEL)]
    pub failed_label: String,

    /// Print the report without posting it
    #[arg(long)]
    pub dry_run: bool,

    /// Do not echo the report to the terminal
    #[arg(short, long)]
    pub quiet: bool,
}
