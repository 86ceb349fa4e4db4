//! Command-line surface.

use clap::{Parser, ValueEnum};
use helpers::{
    DEFAULT_CLIENT_NAME, DEFAULT_HOST_PORT, DEFAULT_NAMESPACE, DEFAULT_SERVICE_NAME,
    DEFAULT_TASK_QUEUE, ServiceConfig,
};

use crate::trigger::DEFAULT_INPUT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Poll the task queue until shut down.
    Worker,
    /// Submit one workflow execution and exit.
    Trigger,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "simple_worker")]
#[command(about = "Run a hello-world worker or trigger one workflow execution")]
pub struct Cli {
    #[arg(short = 'm', long, value_enum, default_value_t = Mode::Trigger)]
    pub mode: Mode,

    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Frontend address as host:port.
    #[arg(long, default_value = DEFAULT_HOST_PORT)]
    pub host_port: String,

    #[arg(long, default_value = DEFAULT_TASK_QUEUE)]
    pub task_queue: String,

    #[arg(long, default_value = DEFAULT_CLIENT_NAME)]
    pub client_name: String,

    #[arg(long, default_value = DEFAULT_SERVICE_NAME)]
    pub service_name: String,

    /// Argument passed to the workflow in trigger mode.
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: String,
}

impl Cli {
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            namespace: self.namespace.clone(),
            host_port: self.host_port.clone(),
            task_queue: self.task_queue.clone(),
            client_name: self.client_name.clone(),
            service_name: self.service_name.clone(),
        }
    }
}
