//! Worker mode registers exactly the two hello-world callbacks.

use simple_worker::registry::{Registrar, register_callbacks};
use temporal_sdk::{IntoActivityFunc, WorkflowFunction};

#[derive(Debug, PartialEq, Eq)]
enum Registered {
    Workflow(String),
    Activity(String),
}

#[derive(Default)]
struct RecordingRegistrar {
    calls: Vec<Registered>,
}

impl Registrar for RecordingRegistrar {
    fn add_workflow(&mut self, workflow_type: &str, _wf: impl Into<WorkflowFunction>) {
        self.calls.push(Registered::Workflow(workflow_type.to_owned()));
    }

    fn add_activity<A, R, O>(&mut self, activity_type: &str, _act: impl IntoActivityFunc<A, R, O>) {
        self.calls.push(Registered::Activity(activity_type.to_owned()));
    }
}

#[test]
fn registers_exactly_the_hello_world_callbacks() {
    let mut registrar = RecordingRegistrar::default();
    register_callbacks(&mut registrar);

    assert_eq!(
        registrar.calls,
        vec![
            Registered::Activity("hello_world_activity".to_owned()),
            Registered::Workflow("hello_world_workflow".to_owned()),
        ]
    );
}
