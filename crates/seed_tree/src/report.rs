//! Per-run generation report.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::exclusion::SkipReason;
use crate::plan::Target;

/// What happened to one target during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TargetOutcome {
    /// Directory ensured and provisioner invoked (or logged, in dry-run).
    Provisioned { dry_run: bool },
    /// Excluded by the resource's rule.
    Skipped { reason: SkipReason },
    /// Creating `path` failed; the branch below it is abandoned.
    DirectoryFailed { path: PathBuf, error: String },
    /// A name at `level` is not a single path component; nothing was created.
    InvalidName { level: String, name: String },
    /// Directory exists but the provisioner failed.
    ProvisionFailed { error: String },
    /// An ancestor directory failed earlier in the run.
    Abandoned { failed_parent: PathBuf },
}

impl TargetOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::DirectoryFailed { .. }
                | Self::InvalidName { .. }
                | Self::ProvisionFailed { .. }
                | Self::Abandoned { .. }
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub target: Target,
    pub outcome: TargetOutcome,
}

/// Outcome of a full tree walk, in walk order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub entries: Vec<ReportEntry>,
}

impl GenerationReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, target: Target, outcome: TargetOutcome) {
        self.entries.push(ReportEntry { target, outcome });
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn provisioned(&self) -> usize {
        self.count(|o| matches!(o, TargetOutcome::Provisioned { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, TargetOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(TargetOutcome::is_failure)
    }

    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|e| e.outcome.is_failure())
    }

    /// Entries that failed, in walk order.
    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.outcome.is_failure())
    }

    pub fn duration_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|end| (end - self.started_at).num_milliseconds())
    }

    fn count(&self, pred: impl Fn(&TargetOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

impl Default for GenerationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut report = GenerationReport::new();
        let target = Target::new("payments", "dev", "eu", "db");

        report.record(target.clone(), TargetOutcome::Provisioned { dry_run: false });
        report.record(
            target.clone(),
            TargetOutcome::Skipped {
                reason: SkipReason::RegionExcluded,
            },
        );
        report.record(
            target.clone(),
            TargetOutcome::ProvisionFailed {
                error: "boom".to_string(),
            },
        );
        report.record(
            target,
            TargetOutcome::Abandoned {
                failed_parent: PathBuf::from("payments"),
            },
        );
        report.finish();

        assert_eq!(report.provisioned(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 2);
        assert!(report.has_failures());
        assert!(report.duration_ms().is_some());
    }

    #[test]
    fn test_empty_report_has_no_failures() {
        let report = GenerationReport::default();
        assert!(!report.has_failures());
        assert_eq!(report.failures().count(), 0);
        assert!(report.duration_ms().is_none());
    }
}
