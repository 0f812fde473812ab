//! Report command - build and post the QA report

use crate::cli::Cli;
use crate::cli::context::CommandContext;
use crate::cli::style::{CHECK, Stylize, spinner_style};
use anstream::println;
use indicatif::ProgressBar;
use qa_report::config::ReportConfig;
use qa_report::error::Result;
use qa_report::report::{ReportOptions, run_report};
use qa_report::trigger::TriggerRequest;
use qa_report::types::{LabelNames, ReportOutcome};
use std::time::Duration;

/// Options for the report command, resolved from the command line
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Options handed to the report engine
    pub report: ReportOptions,
    /// Skip terminal output
    pub quiet: bool,
}

impl RunOptions {
    /// Resolve options from parsed arguments
    ///
    /// A non-blank `--channel` wins over the payload's channel.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let request = match cli.request.as_deref() {
            Some(json) => TriggerRequest::from_json(json)?,
            None => TriggerRequest::default(),
        }
        .with_channel_override(cli.channel.clone());
        let channel = request.channel().to_string();

        Ok(Self {
            report: ReportOptions {
                channel,
                labels: LabelNames {
                    approved: cli.approved_label.clone(),
                    failed: cli.failed_label.clone(),
                },
                dry_run: cli.dry_run,
            },
            quiet: cli.quiet,
        })
    }
}

/// Run the report command
pub async fn run(config: &ReportConfig, options: &RunOptions) -> Result<()> {
    let ctx = CommandContext::new(config)?;

    let spinner = if options.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(spinner_style());
    spinner.set_message(format!(
        "Checking PRs in {}...",
        config.repository.to_string().emphasis()
    ));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = run_report(
        ctx.platform.as_ref(),
        ctx.messaging.as_ref(),
        &options.report,
    )
    .await;
    spinner.finish_and_clear();
    let outcome = outcome?;

    if !options.quiet {
        print_outcome(&outcome);
    }
    Ok(())
}

/// Echo the report and a one-line summary
fn print_outcome(outcome: &ReportOutcome) {
    for line in outcome.text.lines() {
        println!("{}", line.highlight());
    }
    println!();

    let counts = format!(
        "{} approved, {} not tested, {} failed",
        outcome.approved, outcome.not_tested, outcome.failed
    );
    if outcome.posted {
        println!(
            "{} {} {}",
            format!("{CHECK} Posted to").success(),
            outcome.channel.accent(),
            format!("({counts})").muted()
        );
    } else {
        println!(
            "{} {}",
            "Dry run complete, nothing posted".muted(),
            format!("({counts})").muted()
        );
    }
}
