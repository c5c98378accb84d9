use std::path::PathBuf;

use crate::shared::error::RoundError;

use super::output_naming::RoundJob;

/// What to do with the rest of a batch once one file has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop handing out new files; files already in progress still finish.
    #[default]
    FailFast,
    /// Process every file and collect all failures.
    KeepGoing,
}

/// Per-file work run by a [`BatchExecutor`].
pub type JobTask<'a> = &'a (dyn Fn(&RoundJob) -> Result<(), RoundError> + Sync);

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<(PathBuf, RoundError)>,
}

impl BatchReport {
    /// Files never started because the batch was aborted.
    pub fn skipped(&self) -> usize {
        self.total - self.succeeded - self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.skipped() == 0
    }

    /// Converts the report into the error reported to the user, if any.
    ///
    /// A single failure is returned as is so its message reaches the user
    /// unchanged; several collapse into [`RoundError::BatchFailed`].
    pub fn into_result(mut self) -> Result<usize, RoundError> {
        match self.failures.len() {
            0 => Ok(self.succeeded),
            1 => Err(self.failures.remove(0).1),
            failed => Err(RoundError::BatchFailed {
                failed,
                total: self.total,
            }),
        }
    }
}

/// Abstracts how a batch of independent files is scheduled.
pub trait BatchExecutor: Send + Sync {
    fn execute(&self, jobs: Vec<RoundJob>, task: JobTask<'_>, policy: FailurePolicy) -> BatchReport;
}
