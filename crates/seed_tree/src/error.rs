//! Error types for tree generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur while scaffolding a single branch.
///
/// None of these abort a run; the generator records them per target.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("{path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Provisioner error: {0}")]
    Provision(#[from] seed_runner::RunnerError),
}
