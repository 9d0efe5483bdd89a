//! Sequential workflow executor.

use tracing::{debug, warn};

use crate::activity::Activity;
use crate::context::ProcessContext;
use crate::error::WorkflowError;

type BoxedActivity<T, E> = Box<dyn Activity<T, Error = E>>;

/// Ordered chain of activities sharing one error type.
///
/// Activities run strictly in insertion order and none is ever re-run. The run
/// ends at the first error, when an activity calls `stop_process`, or after the
/// last activity.
pub struct Workflow<T, E> {
    name: String,
    activities: Vec<BoxedActivity<T, E>>,
}

impl<T, E> Workflow<T, E>
where
    E: std::error::Error + 'static,
{
    pub fn builder(name: impl Into<String>) -> WorkflowBuilder<T, E> {
        WorkflowBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn activity_names(&self) -> Vec<&str> {
        self.activities.iter().map(|a| a.name()).collect()
    }

    /// Run the workflow over a fresh context built from `seed_data`.
    pub fn process(&self, seed_data: T) -> Result<ProcessContext<T>, WorkflowError<E>> {
        self.process_context(ProcessContext::new(seed_data))
    }

    /// Run the workflow over an existing context.
    pub fn process_context(
        &self,
        mut context: ProcessContext<T>,
    ) -> Result<ProcessContext<T>, WorkflowError<E>> {
        for activity in &self.activities {
            if context.is_stopped() {
                debug!(workflow = %self.name, activity = activity.name(), "workflow stopped early");
                break;
            }
            if !activity.should_execute(&context) {
                debug!(workflow = %self.name, activity = activity.name(), "activity skipped");
                continue;
            }

            debug!(workflow = %self.name, activity = activity.name(), "executing activity");
            context = activity.execute(context).map_err(|source| {
                warn!(
                    workflow = %self.name,
                    activity = activity.name(),
                    error = %source,
                    "activity failed"
                );
                WorkflowError::new(self.name.clone(), activity.name(), source)
            })?;
        }
        Ok(context)
    }
}

impl<T, E> core::fmt::Debug for Workflow<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Workflow")
            .field("name", &self.name)
            .field(
                "activities",
                &self.activities.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builds a `Workflow` one activity at a time.
pub struct WorkflowBuilder<T, E> {
    name: String,
    activities: Vec<BoxedActivity<T, E>>,
}

impl<T, E> WorkflowBuilder<T, E> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
        }
    }

    /// Append an activity; it runs after every activity added before it.
    pub fn activity<A>(mut self, activity: A) -> Self
    where
        A: Activity<T, Error = E> + 'static,
    {
        self.activities.push(Box::new(activity));
        self
    }

    pub fn boxed_activity(mut self, activity: BoxedActivity<T, E>) -> Self {
        self.activities.push(activity);
        self
    }

    pub fn build(self) -> Workflow<T, E> {
        Workflow {
            name: self.name,
            activities: self.activities,
        }
    }
}
