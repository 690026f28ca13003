//! CLI command definitions.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use seed_config::{ConfigLoader, Configuration};

pub mod generate;
pub mod plan;

/// treeseed - scaffold provisioning stacks from a declarative config
#[derive(Parser)]
#[command(name = "treeseed")]
#[command(version, about = "treeseed - scaffold provisioning stacks from a declarative config")]
#[command(long_about = r#"
treeseed reads a config of subscriptions, environments, regions and resources,
creates <subscription>/<environment>/<region>/<resource> for every combination
a resource is not excluded from, and runs the provisioning tool in each leaf.

WORKFLOWS:
  generate  → Create the directory tree and provision every leaf
  plan      → Show what generate would do, without touching anything

EXIT CODES:
  0 - Success (failed targets are logged, not fatal)
  1 - General error
  2 - Invalid arguments
  3 - Configuration could not be loaded
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the directory tree and provision each leaf
    Generate(generate::GenerateArgs),

    /// Print the ordered scaffolding plan
    Plan(plan::PlanArgs),
}

/// Load the scaffolding config; failures here are fatal for the run.
pub fn load_config(path: &Path) -> Result<Configuration> {
    let config = ConfigLoader::load(path).context("Error loading config")?;
    debug!(
        "{} combinations before exclusions",
        config.combination_count()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["treeseed", "generate"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.config, PathBuf::from("config.yml"));
                assert_eq!(args.provisioner, "terramate");
                assert!(args.root.is_none());
                assert!(!args.dry_run);
            }
            Commands::Plan(_) => panic!("expected generate"),
        }
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "treeseed",
            "-v",
            "generate",
            "--config",
            "stacks.yml",
            "--root",
            "out",
            "--provisioner",
            "/opt/bin/terramate",
            "--provisioner-arg",
            "--no-generate",
            "--dry-run",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Generate(args) => {
                let config = args.provisioner_config();
                assert_eq!(args.config, PathBuf::from("stacks.yml"));
                assert_eq!(args.root, Some(PathBuf::from("out")));
                assert_eq!(config.program, "/opt/bin/terramate");
                assert_eq!(config.extra_args, vec!["--no-generate"]);
                assert!(config.dry_run);
            }
            Commands::Plan(_) => panic!("expected generate"),
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["treeseed", "-v", "-q", "plan"]).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/treeseed/config.yml")).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Error loading config"));
    }
}
