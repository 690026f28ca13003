//! # seed_runner
//!
//! Provisioning command execution for treeseed.
//!
//! Every generated leaf directory is handed to an external provisioning CLI
//! (`terramate` by default) together with its tag string.
//!
//! # Features
//!
//! - **Command Provisioner**: runs `<program> create --tags <tags> <dir>` with
//!   output passed straight through
//! - **Dry-Run Mode**: log the command line without executing it
//! - **Mock Provisioner**: for testing without the external tool
//!
//! # Example
//!
//! ```rust,no_run
//! use seed_runner::{CommandProvisioner, Provisioner, ProvisionerConfig};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provisioner = CommandProvisioner::new(ProvisionerConfig::terramate());
//!     provisioner
//!         .create(Path::new("payments/dev/eu/db"), "payments,db,eu,dev")
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod mock;
pub mod provisioner;

pub use command::CommandProvisioner;
pub use config::{ProvisionerConfig, DEFAULT_PROGRAM};
pub use error::{RunnerError, RunnerResult};
pub use mock::{MockProvisioner, ProvisionCall};
pub use provisioner::{ProvisionOutcome, Provisioner};
