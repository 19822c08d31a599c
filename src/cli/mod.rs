//! Command-line workflow layer
//!
//! Separates argument parsing in `main` from the check workflow itself so
//! the workflow can be driven programmatically and tested against mock
//! sinks.

pub mod orchestration;

pub use orchestration::{run_check_workflow, CheckOutcome, CheckWorkflowArgs};
