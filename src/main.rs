//! qa-report binary

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, RunOptions};
use qa_report::config::ReportConfig;

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let options = RunOptions::from_cli(&cli)?;
    let config = ReportConfig::from_env().context("failed to load configuration")?;

    cli::run(&config, &options).await?;
    Ok(())
}
