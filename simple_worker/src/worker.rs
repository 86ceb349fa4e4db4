//! Long-running worker: polls the task queue until a shutdown signal.

use std::sync::Arc;

use anyhow::Context;
use helpers::{ServiceConfig, get_client};
use log::{info, warn};
use temporal_sdk::Worker;
use temporal_sdk_core::{CoreRuntime, init_worker};
use temporal_sdk_core_api::{
    telemetry::TelemetryOptionsBuilder,
    worker::{WorkerConfigBuilder, WorkerVersioningStrategy},
};

use crate::registry::register_callbacks;

const BUILD_ID: &str = "rust-sdk";

/// Run the worker until Ctrl-C (or SIGTERM), then drain and return.
pub async fn run(config: &ServiceConfig) -> anyhow::Result<()> {
    let client = get_client(config).await?;

    let telemetry_options = TelemetryOptionsBuilder::default().build()?;
    let runtime = CoreRuntime::new_assume_tokio(telemetry_options)
        .context("failed creating core runtime")?;

    let worker_config = WorkerConfigBuilder::default()
        .namespace(config.namespace.as_str())
        .task_queue(config.task_queue.as_str())
        .versioning_strategy(WorkerVersioningStrategy::None {
            build_id: BUILD_ID.to_owned(),
        })
        .build()
        .context("failed building worker config")?;

    let core_worker =
        init_worker(&runtime, worker_config, client).context("failed starting core worker")?;
    let mut worker = Worker::new_from_core(Arc::new(core_worker), config.task_queue.as_str());

    register_callbacks(&mut worker);

    let shutdown = worker.shutdown_handle();
    info!("Started worker task_queue={}", config.task_queue);

    run_until_shutdown(worker.run(), shutdown_signal(), shutdown).await?;

    info!("Worker stopped task_queue={}", config.task_queue);
    Ok(())
}

/// Drive `polling` until it ends on its own or `signal` fires.
///
/// On signal, `shutdown` is invoked once and `polling` is awaited until it
/// has drained. A polling error on either path is returned.
pub async fn run_until_shutdown<P, S, F>(polling: P, signal: S, shutdown: F) -> anyhow::Result<()>
where
    P: Future<Output = anyhow::Result<()>>,
    S: Future<Output = ()>,
    F: Fn(),
{
    tokio::pin!(polling);

    tokio::select! {
        res = &mut polling => {
            res.context("worker stopped unexpectedly")?;
        }
        () = signal => {
            info!("shutdown requested, draining in-flight tasks");
            shutdown();
            polling.await.context("worker failed while draining")?;
        }
    }

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Unable to listen for Ctrl-C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                warn!("Unable to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
