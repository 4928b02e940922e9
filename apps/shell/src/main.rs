#![allow(clippy::print_stdout)]

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use eshare::domain::config::ShellConfig;
use eshare::kernel::config::load_config;
use eshare_logger::Logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: ShellConfig = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    let _logger = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;

    let output = commands::run(cli.command, &config.client)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
