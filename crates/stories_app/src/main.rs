mod cli;
mod config;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = cli::Args::parse().into_config();
    platform::run_app(config)
}
