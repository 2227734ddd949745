mod cli;
mod logging;

use anyhow::Context;
use aulog_diag::LoggerConfig;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => LoggerConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => LoggerConfig::default(),
    };
    let config = config.apply_env().context("reading AULOG_* environment")?;

    logging::init(config.level)?;
    tracing::debug!(category = %config.category, "aulog starting");

    cli::run(cli.command, &config)
}
