//! Terminable jobs for QRush.
//!
//! A job implementing [`Terminable`] calls `handle_termination()` before doing
//! any work. If its kill switch is on, the job is deleted and a
//! [`JobTerminated`] error is returned instead of running the body.
//! [`run_job`] runs a job's lifecycle hooks and reports termination as its own
//! outcome, separate from failures.

pub mod config;
pub mod error;
pub mod job;
pub mod runner;
pub mod terminable;
pub mod utils;

pub use config::TerminationConfig;
pub use error::{termination_of, JobTerminated, TerminationError};
pub use job::Job;
pub use runner::{run_job, JobOutcome, JobReport, JobRun, JobStatus};
pub use terminable::{handle_termination, Terminable};
