//! Provisioner trait and types.

use std::path::Path;

use async_trait::async_trait;

use crate::error::RunnerResult;

/// Outcome of a successful provisioner call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    /// The command ran and exited with status 0.
    Completed,
    /// The command was only logged.
    DryRun,
}

/// External tool that turns a leaf directory into a tagged stack.
#[async_trait]
pub trait Provisioner: Send + Sync {
    /// Program name, for log messages.
    fn name(&self) -> &str;

    /// Provision `dir`, tagging it with `tags`.
    async fn create(&self, dir: &Path, tags: &str) -> RunnerResult<ProvisionOutcome>;
}
