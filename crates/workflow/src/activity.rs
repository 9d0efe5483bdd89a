use crate::context::ProcessContext;

/// One business-rule stage of a workflow.
///
/// Activities receive the context by value and hand it back on success. To let
/// the request through untouched, return the context as received.
pub trait Activity<T>: Send + Sync {
    type Error;

    /// Stable name used in logs and in `WorkflowError`.
    fn name(&self) -> &str;

    /// Skip this activity for the given context. Defaults to always running.
    fn should_execute(&self, _context: &ProcessContext<T>) -> bool {
        true
    }

    fn execute(&self, context: ProcessContext<T>) -> Result<ProcessContext<T>, Self::Error>;
}
