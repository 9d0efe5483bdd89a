//! Activity pipeline.
//!
//! A workflow threads a `ProcessContext` through an ordered list of activities.
//! Each activity returns the context (possibly updated) or an error; the first
//! error stops the workflow. Nothing is rolled back: an activity that has side
//! effects must clean up after itself before failing, or leave it to the caller.

pub mod activity;
pub mod context;
pub mod error;
pub mod processor;

pub use activity::Activity;
pub use context::ProcessContext;
pub use error::WorkflowError;
pub use processor::{Workflow, WorkflowBuilder};
