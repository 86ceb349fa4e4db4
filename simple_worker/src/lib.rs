//! `simple_worker` crate.
//!
//! One binary, two modes: `worker` registers the hello-world workflow and
//! activity on a task queue and polls until shut down, `trigger` submits a
//! single workflow execution and exits.

pub mod activities;
pub mod cli;
pub mod logger;
pub mod registry;
pub mod trigger;
pub mod worker;
pub mod workflow;
