//! Seam between callback registration and the SDK worker.

use temporal_sdk::{IntoActivityFunc, Worker, WorkflowFunction};

use crate::activities::{HELLO_WORLD_ACTIVITY, hello_world_activity};
use crate::workflow::{HELLO_WORLD_WORKFLOW, hello_world_workflow};

/// Anything workflows and activities can be registered on.
pub trait Registrar {
    fn add_workflow(&mut self, workflow_type: &str, wf: impl Into<WorkflowFunction>);

    fn add_activity<A, R, O>(&mut self, activity_type: &str, act: impl IntoActivityFunc<A, R, O>);
}

impl Registrar for Worker {
    fn add_workflow(&mut self, workflow_type: &str, wf: impl Into<WorkflowFunction>) {
        self.register_wf(workflow_type, wf);
    }

    fn add_activity<A, R, O>(&mut self, activity_type: &str, act: impl IntoActivityFunc<A, R, O>) {
        self.register_activity(activity_type, act);
    }
}

/// Register the hello-world activity and workflow. Must run before polling
/// starts.
pub fn register_callbacks(registrar: &mut impl Registrar) {
    registrar.add_activity(HELLO_WORLD_ACTIVITY, hello_world_activity);
    registrar.add_workflow(HELLO_WORLD_WORKFLOW, hello_world_workflow);
}
