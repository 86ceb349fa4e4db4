//! Activity executed on behalf of `hello_world_workflow`.
use log::info;
use temporal_sdk::{ActContext, ActivityError};

pub const HELLO_WORLD_ACTIVITY: &str = "hello_world_activity";

pub fn greeting(name: &str) -> String {
    format!("Hello {name}!")
}

pub async fn hello_world_activity(_ctx: ActContext, name: String) -> Result<String, ActivityError> {
    info!("{HELLO_WORLD_ACTIVITY} started name={name}");
    Ok(greeting(&name))
}
