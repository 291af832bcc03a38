mod app;
mod config;
mod contacts;
mod feed;

use clap::Parser;
use nabu_engine::logging::init_logging;

use crate::config::Cli;

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();
    init_logging(config.logging.clone());

    log::debug!("starting with {config:?}");
    app::run(config)
}
