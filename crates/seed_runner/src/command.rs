//! Subprocess-backed provisioner.
//!
//! Runs the configured program once per leaf directory and waits for it to
//! exit. The child's stdout and stderr are inherited, so its output appears
//! unmodified on our own streams.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::ProvisionerConfig;
use crate::error::{RunnerError, RunnerResult};
use crate::provisioner::{ProvisionOutcome, Provisioner};

/// Provisioner that shells out to an external CLI such as `terramate`.
pub struct CommandProvisioner {
    config: ProvisionerConfig,
}

impl CommandProvisioner {
    pub fn new(config: ProvisionerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProvisionerConfig {
        &self.config
    }

    /// Check if dry-run mode is enabled.
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}

impl Default for CommandProvisioner {
    fn default() -> Self {
        Self::new(ProvisionerConfig::default())
    }
}

#[async_trait]
impl Provisioner for CommandProvisioner {
    fn name(&self) -> &str {
        &self.config.program
    }

    async fn create(&self, dir: &Path, tags: &str) -> RunnerResult<ProvisionOutcome> {
        if self.config.dry_run {
            info!("[dry-run] {}", self.config.format_command(dir, tags));
            return Ok(ProvisionOutcome::DryRun);
        }

        info!(
            "Running {} command in folder: {} with tags: {}",
            self.config.program,
            dir.display(),
            tags
        );
        debug!("Executing: {}", self.config.format_command(dir, tags));

        let status = Command::new(&self.config.program)
            .args(self.config.build_args(dir, tags))
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| RunnerError::SpawnFailed {
                program: self.config.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(ProvisionOutcome::Completed)
        } else {
            Err(RunnerError::NonZeroExit {
                program: self.config.program.clone(),
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dry_run_does_not_spawn() {
        let provisioner = CommandProvisioner::new(
            ProvisionerConfig::new("definitely-not-a-real-provisioner").dry_run(true),
        );

        let outcome = provisioner
            .create(Path::new("payments/dev/eu/db"), "payments,db,eu,dev")
            .await
            .unwrap();
        assert_eq!(outcome, ProvisionOutcome::DryRun);
        assert!(provisioner.is_dry_run());
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_failure() {
        let provisioner =
            CommandProvisioner::new(ProvisionerConfig::new("definitely-not-a-real-provisioner"));

        let err = provisioner
            .create(Path::new("payments/dev/eu/db"), "payments,db,eu,dev")
            .await
            .unwrap_err();
        assert!(matches!(err, RunnerError::SpawnFailed { .. }));
    }
}
