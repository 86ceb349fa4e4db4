//! Workflow definition: greets its argument through one activity call.

use std::time::Duration;

use helpers::{first_arg_or, parse_activity_result};
use log::info;
use temporal_sdk::{ActivityOptions, WfContext, WfExitValue, WorkflowResult};
use temporal_sdk_core_protos::coresdk::AsJsonPayloadExt;

use crate::activities::HELLO_WORLD_ACTIVITY;

pub const HELLO_WORLD_WORKFLOW: &str = "hello_world_workflow";

/// Workflow receives a String arg, hands it to `hello_world_activity` and
/// returns the greeting.
pub async fn hello_world_workflow(ctx: WfContext) -> WorkflowResult<String> {
    let name: String = first_arg_or(ctx.get_args(), "World".to_owned())?;

    info!("{HELLO_WORLD_WORKFLOW} started name={name}");

    let act_handle = ctx
        .activity(ActivityOptions {
            activity_type: HELLO_WORLD_ACTIVITY.to_string(),
            input: name.as_json_payload()?,
            schedule_to_start_timeout: Some(Duration::from_secs(60)),
            start_to_close_timeout: Some(Duration::from_secs(60)),
            heartbeat_timeout: Some(Duration::from_secs(20)),
            ..Default::default()
        })
        .await;

    let result: String = parse_activity_result(&act_handle)?;
    info!("HelloWorld workflow completed result={result}");

    Ok(WfExitValue::Normal(result))
}
