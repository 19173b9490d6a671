// src/job.rs
use async_trait::async_trait;

use crate::error::JobTerminated;

#[async_trait]
pub trait Job: Send + Sync {
    type Output: Send;

    async fn before(&self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Job body. Terminable jobs start with `self.handle_termination()?`.
    async fn perform(&self) -> anyhow::Result<Self::Output>;

    async fn after(&self) {}
    async fn on_error(&self, _err: &anyhow::Error) {}
    async fn on_terminated(&self, _signal: &JobTerminated) {}
    async fn always(&self) {}

    fn name(&self) -> &'static str;

    fn queue(&self) -> &'static str {
        "default"
    }
}
