//! Mock provisioner for testing.
//!
//! Records every call and answers from configured failure patterns, so tree
//! generation can be verified without an external tool installed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{RunnerError, RunnerResult};
use crate::provisioner::{ProvisionOutcome, Provisioner};

/// Captured call information for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionCall {
    pub dir: PathBuf,
    pub tags: String,
}

/// Mock provisioner for testing.
#[derive(Clone)]
pub struct MockProvisioner {
    /// Directories containing any of these substrings fail.
    failing: Arc<RwLock<Vec<String>>>,
    calls: Arc<RwLock<Vec<ProvisionCall>>>,
}

impl Default for MockProvisioner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvisioner {
    pub fn new() -> Self {
        Self {
            failing: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Fail every call whose directory contains `pattern`.
    pub fn fail_when_dir_contains(self, pattern: impl Into<String>) -> Self {
        self.failing.write().push(pattern.into());
        self
    }

    /// Get all captured calls.
    pub fn get_calls(&self) -> Vec<ProvisionCall> {
        self.calls.read().clone()
    }

    /// Tag strings of all calls, in call order.
    pub fn tags(&self) -> Vec<String> {
        self.calls.read().iter().map(|c| c.tags.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().len()
    }

    pub fn clear_calls(&self) {
        self.calls.write().clear();
    }

    fn should_fail(&self, dir: &Path) -> bool {
        let dir = dir.to_string_lossy();
        self.failing.read().iter().any(|p| dir.contains(p.as_str()))
    }
}

#[async_trait]
impl Provisioner for MockProvisioner {
    fn name(&self) -> &str {
        "mock"
    }

    async fn create(&self, dir: &Path, tags: &str) -> RunnerResult<ProvisionOutcome> {
        self.calls.write().push(ProvisionCall {
            dir: dir.to_path_buf(),
            tags: tags.to_string(),
        });

        if self.should_fail(dir) {
            return Err(RunnerError::ExecutionFailed(format!(
                "simulated failure for {}",
                dir.display()
            )));
        }
        Ok(ProvisionOutcome::Completed)
    }
}
