//! Shared utilities: connection settings, the client factory and payload
//! decoding for workflow arguments and activity results.

use anyhow::Context;
use log::info;
use temporal_client::{Client, RetryClient};
use temporal_sdk::sdk_client_options;

mod config;
mod parse_activity_result;
mod workflow_args;

pub use config::{
    CALLER_HEADER, DEFAULT_CLIENT_NAME, DEFAULT_HOST_PORT, DEFAULT_NAMESPACE,
    DEFAULT_SERVICE_NAME, DEFAULT_TASK_QUEUE, SERVICE_HEADER, ServiceConfig,
};
pub use parse_activity_result::parse_activity_result;
pub use workflow_args::first_arg_or;

/// Connect to the orchestration service described by `config`.
///
/// The config is validated before anything touches the network, so a
/// malformed `host_port` fails here instead of surfacing as a transport error.
pub async fn get_client(config: &ServiceConfig) -> Result<RetryClient<Client>, anyhow::Error> {
    config.validate().context("invalid service configuration")?;

    let opts = sdk_client_options(config.target_url()?)
        .identity(config.client_name.clone())
        .headers(Some(config.rpc_headers()))
        .build()
        .context("failed building Temporal client options")?;

    // Connect returns a `RetryClient<Client>` which automatically retries
    // transient failures.
    let client = opts
        .connect(config.namespace.clone(), None)
        .await
        .with_context(|| format!("failed connecting to {} at {}", config.service_name, config.host_port))?;

    info!(
        "connected to {} at {} namespace={}",
        config.service_name, config.host_port, config.namespace
    );

    Ok(client)
}
