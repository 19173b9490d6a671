// src/error.rs

/// Raised when a job was deleted instead of run because its kill switch was on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("The job `{job_type}` was not run because `shouldTerminate()` returned `true`")]
pub struct JobTerminated {
    job_type: String,
}

impl JobTerminated {
    pub fn should_terminate(job_type: impl Into<String>) -> Self {
        Self {
            job_type: job_type.into(),
        }
    }

    pub fn job_type(&self) -> &str {
        &self.job_type
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TerminationError {
    /// The job was removed and must not run.
    #[error(transparent)]
    Terminated(#[from] JobTerminated),

    /// The job wanted to terminate but could not be removed, so it was left in place.
    #[error("failed to delete job `{job_type}` before terminating it")]
    Delete {
        job_type: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl TerminationError {
    pub fn as_terminated(&self) -> Option<&JobTerminated> {
        match self {
            TerminationError::Terminated(signal) => Some(signal),
            TerminationError::Delete { .. } => None,
        }
    }
}

/// Finds a termination signal inside an error that was propagated with `?`.
pub fn termination_of(err: &anyhow::Error) -> Option<&JobTerminated> {
    if let Some(signal) = err.downcast_ref::<JobTerminated>() {
        return Some(signal);
    }
    err.downcast_ref::<TerminationError>()
        .and_then(TerminationError::as_terminated)
}
