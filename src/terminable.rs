// src/terminable.rs
use tracing::{debug, error, info};

use crate::error::{JobTerminated, TerminationError};

/// A job that can be switched off before it does any work.
///
/// Call [`Terminable::handle_termination`] as the first step of the job body and
/// propagate its error with `?`. When [`Terminable::should_terminate`] is `true`
/// the job is deleted and the body never runs.
pub trait Terminable {
    /// Decides whether the job should be dropped instead of run.
    fn should_terminate(&self) -> bool;

    /// Removes this job from whatever queue or store holds it.
    fn delete(&self) -> anyhow::Result<()>;

    /// Name used in the termination message.
    fn job_type(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn handle_termination(&self) -> Result<(), TerminationError> {
        handle_termination(self)
    }
}

/// Deletes `job` and returns [`JobTerminated`] if its predicate holds, otherwise does nothing.
///
/// The predicate is read once. A failed delete is returned as
/// [`TerminationError::Delete`] and no termination is signalled.
pub fn handle_termination<T>(job: &T) -> Result<(), TerminationError>
where
    T: Terminable + ?Sized,
{
    if !job.should_terminate() {
        debug!("Job {} not terminated", job.job_type());
        return Ok(());
    }

    if let Err(err) = job.delete() {
        error!("Failed to delete terminated job {}: {:?}", job.job_type(), err);
        return Err(TerminationError::Delete {
            job_type: job.job_type().to_string(),
            source: err.into(),
        });
    }

    info!("🛑 Job {} deleted without running", job.job_type());
    Err(JobTerminated::should_terminate(job.job_type()).into())
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Switch {
        on: bool,
        checks: Cell<usize>,
        deletes: Cell<usize>,
        fail_delete: bool,
    }

    impl Switch {
        fn new(on: bool) -> Self {
            Self {
                on,
                checks: Cell::new(0),
                deletes: Cell::new(0),
                fail_delete: false,
            }
        }
    }

    impl Terminable for Switch {
        fn should_terminate(&self) -> bool {
            self.checks.set(self.checks.get() + 1);
            self.on
        }

        fn delete(&self) -> anyhow::Result<()> {
            self.deletes.set(self.deletes.get() + 1);
            if self.fail_delete {
                anyhow::bail!("store offline");
            }
            Ok(())
        }

        fn job_type(&self) -> &str {
            "switch"
        }
    }

    #[test]
    fn passes_through_when_predicate_is_false() {
        let job = Switch::new(false);
        assert!(job.handle_termination().is_ok());
        assert_eq!(job.deletes.get(), 0);
        assert_eq!(job.checks.get(), 1);
    }

    #[test]
    fn deletes_once_then_signals() {
        let job = Switch::new(true);
        let err = job.handle_termination().unwrap_err();
        assert_eq!(job.deletes.get(), 1);
        assert_eq!(job.checks.get(), 1);
        assert_eq!(err.as_terminated(), Some(&JobTerminated::should_terminate("switch")));
    }

    #[test]
    fn failed_delete_is_reported_instead_of_termination() {
        let mut job = Switch::new(true);
        job.fail_delete = true;
        let err = handle_termination(&job).unwrap_err();
        assert!(err.as_terminated().is_none());
        match err {
            TerminationError::Delete { job_type, source } => {
                assert_eq!(job_type, "switch");
                assert_eq!(source.to_string(), "store offline");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn default_job_type_is_the_type_path() {
        struct Plain;
        impl Terminable for Plain {
            fn should_terminate(&self) -> bool {
                true
            }

            fn delete(&self) -> anyhow::Result<()> {
                Ok(())
            }
        }

        let err = Plain.handle_termination().unwrap_err();
        let signal = err.as_terminated().unwrap();
        assert!(signal.job_type().ends_with("Plain"));
        assert_eq!(signal.job_type(), std::any::type_name::<Plain>());
    }

    #[test]
    fn works_through_a_trait_object() {
        let job: Box<dyn Terminable> = Box::new(Switch::new(true));
        assert!(handle_termination(job.as_ref()).is_err());
    }
}
