/// State threaded through one workflow run.
///
/// Owned by a single `Workflow::process` call and returned to the caller at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessContext<T> {
    seed_data: T,
    stopped: bool,
}

impl<T> ProcessContext<T> {
    pub fn new(seed_data: T) -> Self {
        Self {
            seed_data,
            stopped: false,
        }
    }

    pub fn seed_data(&self) -> &T {
        &self.seed_data
    }

    pub fn seed_data_mut(&mut self) -> &mut T {
        &mut self.seed_data
    }

    pub fn into_seed_data(self) -> T {
        self.seed_data
    }

    /// Finish the workflow successfully after the current activity.
    pub fn stop_process(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
