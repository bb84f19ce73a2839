use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use stockdesk_cli::{Cli, Desk, Settings, commands};
use stockdesk_core::SystemClock;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);
    stockdesk_observability::init_with(settings.log_format);

    let clock = Arc::new(SystemClock);
    let mut desk = Desk::seeded(clock.clone()).context("loading sample data")?;

    let output = commands::run(&mut desk, cli.command, &settings, clock.as_ref())?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
