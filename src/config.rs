use std::collections::HashMap;
use tracing::debug;

use crate::utils::constants::DISABLED_JOBS_ENV;


/// Kill switches for jobs, keyed by job name.
///
/// Built once and handed to jobs when they are constructed, so a job's
/// `should_terminate` only looks at its own fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TerminationConfig {
    switches: HashMap<String, bool>,
}


impl TerminationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_configs(configs: Vec<(&str, bool)>) -> Self {
        let mut config = Self::new();
        for (job, disabled) in configs {
            config.set(job, disabled);
        }
        config
    }

    /// Parses a comma separated list of disabled job names.
    pub fn from_list(list: &str) -> Self {
        let mut config = Self::new();
        for job in list.split(',').map(str::trim).filter(|job| !job.is_empty()) {
            config.set(job, true);
        }
        config
    }

    /// Reads disabled job names from `QRUSH_DISABLED_JOBS`. Unset means nothing is disabled.
    pub fn from_env() -> Self {
        match std::env::var(DISABLED_JOBS_ENV) {
            Ok(list) => {
                debug!("Loading disabled jobs from {}: {}", DISABLED_JOBS_ENV, list);
                Self::from_list(&list)
            }
            Err(_) => Self::new(),
        }
    }

    pub fn set(&mut self, job: impl Into<String>, disabled: bool) -> &mut Self {
        self.switches.insert(job.into(), disabled);
        self
    }

    pub fn is_disabled(&self, job: &str) -> bool {
        self.switches.get(job).copied().unwrap_or(false)
    }
}
