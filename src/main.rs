use anyhow::Context;
use clap::Parser;

use datadeck::cli::Cli;
use datadeck::config::Config;
use datadeck::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_to(&mut config);
    config.validate()?;

    logging::init(&config.logging)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    ui::runtime::run(config, runtime.handle().clone())?;
    Ok(())
}
