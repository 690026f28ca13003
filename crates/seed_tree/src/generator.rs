//! Tree generation.
//!
//! Walks a [`TreePlan`] in order, creating
//! `<subscription>/<environment>/<region>/<resource>` for every target that
//! is not excluded and handing the leaf to the provisioner. Failures are
//! logged and recorded per target; the walk itself never fails.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info};

use seed_config::Configuration;
use seed_runner::{ProvisionOutcome, Provisioner};

use crate::error::TreeResult;
use crate::fs::{ensure_dir, is_path_segment, DirOutcome};
use crate::plan::{Decision, Target, TreePlan};
use crate::report::{GenerationReport, TargetOutcome};

/// Directories already handled during the current run.
#[derive(Default)]
struct BranchState {
    ensured: HashSet<PathBuf>,
    failed: HashSet<PathBuf>,
}

/// Scaffolds directory trees and provisions their leaves.
pub struct TreeGenerator {
    root: PathBuf,
    provisioner: Arc<dyn Provisioner>,
}

impl TreeGenerator {
    /// Create a generator writing below `root`.
    ///
    /// An empty root resolves paths against the working directory, so the
    /// provisioner receives plain `<subscription>/.../<resource>` paths.
    pub fn new(root: impl Into<PathBuf>, provisioner: Arc<dyn Provisioner>) -> Self {
        Self {
            root: root.into(),
            provisioner,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scaffold the full tree for `config`.
    pub async fn generate(&self, config: &Configuration) -> GenerationReport {
        let plan = TreePlan::build(config);
        info!(
            "Generating {} targets ({} excluded) below {:?}",
            plan.targets().count(),
            plan.skipped().count(),
            self.display_root()
        );
        self.execute(&plan).await
    }

    /// Execute a prebuilt plan in order.
    pub async fn execute(&self, plan: &TreePlan) -> GenerationReport {
        let mut report = GenerationReport::new();
        let mut branches = BranchState::default();

        if let Err(e) = self.ensure_root() {
            error!("Error creating output root '{}': {}", self.root.display(), e);
            branches.failed.insert(self.root.clone());
        }

        for entry in plan.entries() {
            let outcome = match entry.decision {
                Decision::Skip(reason) => {
                    debug!(
                        "Skipping {} ({})",
                        entry.target.relative_path().display(),
                        reason
                    );
                    TargetOutcome::Skipped { reason }
                }
                Decision::Provision => self.process(&entry.target, &mut branches).await,
            };
            report.record(entry.target.clone(), outcome);
        }

        report.finish();
        info!(
            "Generation finished: {} provisioned, {} skipped, {} failed",
            report.provisioned(),
            report.skipped(),
            report.failed()
        );
        report
    }

    async fn process(&self, target: &Target, branches: &mut BranchState) -> TargetOutcome {
        if branches.failed.contains(&self.root) {
            return TargetOutcome::Abandoned {
                failed_parent: self.root.clone(),
            };
        }

        if let Some((level, name)) = target
            .segments()
            .into_iter()
            .find(|(_, name)| !is_path_segment(name))
        {
            error!(
                "Invalid {} name {:?} for {}: not a single path component",
                level,
                name,
                target.tags()
            );
            return TargetOutcome::InvalidName {
                level: level.to_string(),
                name: name.to_string(),
            };
        }

        let mut dir = self.root.clone();
        for (level, name) in target.segments() {
            dir.push(name);

            if branches.failed.contains(&dir) {
                debug!("Abandoning {} below failed '{}'", target.resource, dir.display());
                return TargetOutcome::Abandoned { failed_parent: dir };
            }
            if branches.ensured.contains(&dir) {
                continue;
            }

            match ensure_dir(&dir) {
                Ok(DirOutcome::Created) => debug!("Created {} folder '{}'", level, dir.display()),
                Ok(DirOutcome::AlreadyExisted) => {
                    debug!("{} folder '{}' already exists", level, dir.display())
                }
                Err(e) => {
                    error!("Error creating {} folder {}", level, e);
                    branches.failed.insert(dir.clone());
                    return TargetOutcome::DirectoryFailed {
                        path: dir,
                        error: e.to_string(),
                    };
                }
            }
            branches.ensured.insert(dir.clone());
        }

        let tags = target.tags().to_string();
        match self.provision(&dir, &tags).await {
            Ok(outcome) => TargetOutcome::Provisioned {
                dry_run: outcome == ProvisionOutcome::DryRun,
            },
            Err(e) => {
                error!(
                    "Error running {} command in '{}': {}",
                    self.provisioner.name(),
                    dir.display(),
                    e
                );
                TargetOutcome::ProvisionFailed {
                    error: e.to_string(),
                }
            }
        }
    }

    async fn provision(&self, dir: &Path, tags: &str) -> TreeResult<ProvisionOutcome> {
        Ok(self.provisioner.create(dir, tags).await?)
    }

    fn ensure_root(&self) -> std::io::Result<()> {
        if self.root.as_os_str().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.root)
    }

    fn display_root(&self) -> &Path {
        if self.root.as_os_str().is_empty() {
            Path::new(".")
        } else {
            &self.root
        }
    }
}
