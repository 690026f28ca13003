//! Provisioner command configuration.

use std::ffi::OsString;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Program invoked when none is configured.
pub const DEFAULT_PROGRAM: &str = "terramate";

/// Shape of the provisioning command line.
///
/// The rendered command is
/// `<program> <subcommand> <tags_flag> <tags> [extra_args...] <dir>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionerConfig {
    /// Executable name or path
    pub program: String,
    /// Subcommand creating a stack
    pub subcommand: String,
    /// Flag preceding the tag string
    pub tags_flag: String,
    /// Extra arguments placed before the directory
    pub extra_args: Vec<String>,
    /// Log commands instead of running them
    pub dry_run: bool,
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self::terramate()
    }
}

impl ProvisionerConfig {
    /// `terramate create --tags <tags> <dir>`
    pub fn terramate() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }

    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            subcommand: "create".to_string(),
            tags_flag: "--tags".to_string(),
            extra_args: Vec::new(),
            dry_run: false,
        }
    }

    pub fn subcommand(mut self, subcommand: impl Into<String>) -> Self {
        self.subcommand = subcommand.into();
        self
    }

    pub fn tags_flag(mut self, flag: impl Into<String>) -> Self {
        self.tags_flag = flag.into();
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Arguments passed to the program for one leaf directory.
    ///
    /// The directory is passed through as-is, even when it is not UTF-8.
    pub fn build_args(&self, dir: &Path, tags: &str) -> Vec<OsString> {
        let mut args: Vec<OsString> = [&self.subcommand, &self.tags_flag]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(tags.into());
        args.extend(self.extra_args.iter().map(OsString::from));
        args.push(dir.as_os_str().to_os_string());
        args
    }

    /// Human-readable command line, for logs and dry runs.
    pub fn format_command(&self, dir: &Path, tags: &str) -> String {
        let mut cmd = self.program.clone();
        for arg in self.build_args(dir, tags) {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                cmd.push_str(&format!(" '{}'", arg));
            } else {
                cmd.push(' ');
                cmd.push_str(&arg);
            }
        }
        cmd
    }
}
