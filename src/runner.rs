use chrono::Utc;
use nanoid::nanoid;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::error::{termination_of, JobTerminated, TerminationError};
use crate::job::Job;
use crate::utils::constants::{STATUS_FAILED, STATUS_SKIPPED, STATUS_SUCCESS, STATUS_TERMINATED};


#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Success,
    Skipped,
    Terminated,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Success => STATUS_SUCCESS,
            JobStatus::Skipped => STATUS_SKIPPED,
            JobStatus::Terminated => STATUS_TERMINATED,
            JobStatus::Failed => STATUS_FAILED,
        }
    }
}


/// What happened to a single run of a job.
#[derive(Debug)]
pub enum JobOutcome<T> {
    Completed(T),
    /// `before` failed for a reason other than termination or a failed delete.
    Skipped(anyhow::Error),
    Terminated(JobTerminated),
    Failed(anyhow::Error),
}

impl<T> JobOutcome<T> {
    pub fn status(&self) -> JobStatus {
        match self {
            JobOutcome::Completed(_) => JobStatus::Success,
            JobOutcome::Skipped(_) => JobStatus::Skipped,
            JobOutcome::Terminated(_) => JobStatus::Terminated,
            JobOutcome::Failed(_) => JobStatus::Failed,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, JobOutcome::Terminated(_))
    }

    pub fn into_result(self) -> anyhow::Result<T> {
        match self {
            JobOutcome::Completed(output) => Ok(output),
            JobOutcome::Terminated(signal) => Err(signal.into()),
            JobOutcome::Skipped(err) | JobOutcome::Failed(err) => Err(err),
        }
    }
}


#[derive(Serialize, Debug, Clone)]
pub struct JobReport {
    pub id: String,
    pub job_name: String,
    pub queue: String,
    pub status: JobStatus,
    pub started_at: String,
    pub finished_at: String,
    pub error: Option<String>,
}

impl JobReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}


#[derive(Debug)]
pub struct JobRun<T> {
    pub report: JobReport,
    pub outcome: JobOutcome<T>,
}


/// Runs one job through its lifecycle hooks.
///
/// A [`JobTerminated`] coming out of `before` or `perform` is reported as
/// `terminated` and goes to `on_terminated`, never to `on_error`. A job that
/// could not be deleted is `failed` whichever hook ran the guard.
pub async fn run_job<J>(job: &J) -> JobRun<J::Output>
where
    J: Job + ?Sized,
{
    let id = nanoid!(10);
    let started_at = Utc::now().to_rfc3339();
    debug!("Running job {} ({}) on queue {}", job.name(), id, job.queue());

    let outcome = match job.before().await {
        Err(err) => match termination_of(&err) {
            Some(signal) => {
                let signal = signal.clone();
                job.on_terminated(&signal).await;
                JobOutcome::Terminated(signal)
            }
            None if is_failed_delete(&err) => {
                job.on_error(&err).await;
                JobOutcome::Failed(err)
            }
            None => {
                warn!("Job {} ({}) skipped: {:?}", job.name(), id, err);
                JobOutcome::Skipped(err)
            }
        },
        Ok(()) => match job.perform().await {
            Ok(output) => {
                job.after().await;
                JobOutcome::Completed(output)
            }
            Err(err) => match termination_of(&err) {
                Some(signal) => {
                    let signal = signal.clone();
                    job.on_terminated(&signal).await;
                    JobOutcome::Terminated(signal)
                }
                None => {
                    job.on_error(&err).await;
                    JobOutcome::Failed(err)
                }
            },
        },
    };

    job.always().await;

    let error = match &outcome {
        JobOutcome::Completed(_) => None,
        JobOutcome::Terminated(signal) => Some(signal.to_string()),
        JobOutcome::Skipped(err) | JobOutcome::Failed(err) => Some(format!("{err:#}")),
    };

    match outcome.status() {
        JobStatus::Success => info!("✅ Job {} ({}) completed", job.name(), id),
        JobStatus::Terminated => info!("🛑 Job {} ({}) terminated", job.name(), id),
        JobStatus::Failed => error!("❌ Job {} ({}) failed: {}", job.name(), id, error.as_deref().unwrap_or_default()),
        JobStatus::Skipped => {}
    }

    let report = JobReport {
        id,
        job_name: job.name().to_string(),
        queue: job.queue().to_string(),
        status: outcome.status(),
        started_at,
        finished_at: Utc::now().to_rfc3339(),
        error,
    };

    JobRun { report, outcome }
}

fn is_failed_delete(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<TerminationError>(),
        Some(TerminationError::Delete { .. })
    )
}
