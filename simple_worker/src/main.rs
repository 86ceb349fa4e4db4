use anyhow::Context;
use clap::Parser;
use log::info;

use simple_worker::cli::{Cli, Mode};
use simple_worker::{logger, trigger, worker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init().context("failed to set up logger")?;

    // Validated by the client factory before any connection attempt.
    let config = cli.service_config();

    info!(
        "mode={:?} namespace={} host_port={} task_queue={}",
        cli.mode, config.namespace, config.host_port, config.task_queue
    );

    match cli.mode {
        Mode::Worker => worker::run(&config).await,
        Mode::Trigger => trigger::run(&config, &cli.input).await,
    }
}
