use thiserror::Error;

/// An activity failed and the workflow stopped.
#[derive(Debug, Error)]
#[error("workflow `{workflow}` stopped at activity `{activity}`: {source}")]
pub struct WorkflowError<E>
where
    E: std::error::Error + 'static,
{
    workflow: String,
    activity: String,
    #[source]
    source: E,
}

impl<E> WorkflowError<E>
where
    E: std::error::Error + 'static,
{
    pub fn new(workflow: impl Into<String>, activity: impl Into<String>, source: E) -> Self {
        Self {
            workflow: workflow.into(),
            activity: activity.into(),
            source,
        }
    }

    pub fn workflow(&self) -> &str {
        &self.workflow
    }

    /// Name of the activity that failed.
    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn cause(&self) -> &E {
        &self.source
    }

    pub fn into_cause(self) -> E {
        self.source
    }
}
