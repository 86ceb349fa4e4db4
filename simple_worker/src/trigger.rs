//! Submit one hello-world workflow execution.

use std::time::Duration;

use helpers::{ServiceConfig, get_client};
use log::{error, info};
use serde_json::json;
use temporal_client::{WorkflowClientTrait, WorkflowOptions};
use temporal_sdk_core_protos::coresdk::AsJsonPayloadExt;
use temporal_sdk_core_protos::temporal::api::common::v1::Payload;
use uuid::Uuid;

use crate::workflow::HELLO_WORLD_WORKFLOW;

pub const WORKFLOW_ID_PREFIX: &str = "helloworld_";
pub const DEFAULT_INPUT: &str = "hola";
pub const EXECUTION_TIMEOUT: Duration = Duration::from_secs(60);
pub const TASK_TIMEOUT: Duration = Duration::from_secs(60);

/// Parameters of a single start-workflow request.
#[derive(Debug, Clone)]
pub struct WorkflowStart {
    pub workflow_id: String,
    pub workflow_type: String,
    pub task_queue: String,
    pub input: String,
    pub execution_timeout: Duration,
    pub task_timeout: Duration,
}

impl WorkflowStart {
    /// Request for `hello_world_workflow` with a freshly generated id.
    pub fn new(config: &ServiceConfig, input: impl Into<String>) -> Self {
        Self {
            workflow_id: format!("{WORKFLOW_ID_PREFIX}{}", Uuid::new_v4()),
            workflow_type: HELLO_WORLD_WORKFLOW.to_owned(),
            task_queue: config.task_queue.clone(),
            input: input.into(),
            execution_timeout: EXECUTION_TIMEOUT,
            task_timeout: TASK_TIMEOUT,
        }
    }

    pub fn options(&self) -> WorkflowOptions {
        WorkflowOptions {
            execution_timeout: Some(self.execution_timeout),
            task_timeout: Some(self.task_timeout),
            ..Default::default()
        }
    }

    pub fn payloads(&self) -> anyhow::Result<Vec<Payload>> {
        Ok(vec![json!(self.input).as_json_payload()?])
    }
}

/// Start one workflow execution and return without waiting for its result.
///
/// Connection failures are fatal. A rejected start request is only logged:
/// trigger mode neither retries nor fails the process over it.
pub async fn run(config: &ServiceConfig, input: &str) -> anyhow::Result<()> {
    let client = get_client(config).await?;

    let start = WorkflowStart::new(config, input);
    info!(
        "starting {} workflow_id={} task_queue={}",
        start.workflow_type, start.workflow_id, start.task_queue
    );

    let res = client
        .start_workflow(
            start.payloads()?,
            start.task_queue.clone(),
            start.workflow_id.clone(),
            start.workflow_type.clone(),
            None,
            start.options(),
        )
        .await;

    match res {
        Ok(started) => info!(
            "started workflow workflow_id={} run_id={}",
            start.workflow_id, started.run_id
        ),
        Err(err) => error!("failed to start workflow workflow_id={}: {err}", start.workflow_id),
    }

    Ok(())
}
