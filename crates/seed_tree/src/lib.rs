//! # seed_tree
//!
//! Directory tree generation for treeseed.
//!
//! Walks subscriptions × environments × regions × resources, drops the
//! combinations a resource's exclusion rule names, creates one directory per
//! remaining combination and provisions it with a tag string.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use seed_config::ConfigLoader;
//! use seed_runner::{CommandProvisioner, ProvisionerConfig};
//! use seed_tree::TreeGenerator;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ConfigLoader::load("config.yml").unwrap();
//!     let provisioner = Arc::new(CommandProvisioner::new(ProvisionerConfig::terramate()));
//!
//!     let report = TreeGenerator::new("", provisioner).generate(&config).await;
//!     println!("{} provisioned, {} failed", report.provisioned(), report.failed());
//! }
//! ```

pub mod error;
pub mod exclusion;
pub mod fs;
pub mod generator;
pub mod plan;
pub mod report;
pub mod tags;

pub use error::{TreeError, TreeResult};
pub use exclusion::{should_skip, skip_reason, SkipReason};
pub use fs::{ensure_dir, DirOutcome, DIR_MODE};
pub use generator::TreeGenerator;
pub use plan::{Decision, PlannedEntry, Target, TreePlan};
pub use report::{GenerationReport, ReportEntry, TargetOutcome};
pub use tags::TagSet;
