//! Generate command - Scaffold the tree and provision every leaf.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use seed_config::DEFAULT_CONFIG_PATH;
use seed_runner::{CommandProvisioner, ProvisionerConfig, DEFAULT_PROGRAM};
use seed_tree::{GenerationReport, TargetOutcome, TreeGenerator};

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the scaffolding config
    #[arg(short, long, env = "TREESEED_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Directory to create the tree under (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Provisioning program run in each leaf directory
    #[arg(long, env = "TREESEED_PROVISIONER", default_value = DEFAULT_PROGRAM)]
    pub provisioner: String,

    /// Extra argument for the provisioner, placed before the directory (repeatable)
    #[arg(long = "provisioner-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub provisioner_args: Vec<String>,

    /// Create directories but only print the provisioning commands
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn provisioner_config(&self) -> ProvisionerConfig {
        self.provisioner_args
            .iter()
            .fold(ProvisionerConfig::new(&self.provisioner), |config, arg| {
                config.arg(arg)
            })
            .dry_run(self.dry_run)
    }
}

pub async fn execute(args: GenerateArgs) -> Result<()> {
    let config = super::load_config(&args.config)?;
    info!("Loaded config from {:?}", args.config);

    let provisioner = CommandProvisioner::new(args.provisioner_config());
    let generator = TreeGenerator::new(args.root.unwrap_or_default(), Arc::new(provisioner));
    let report = generator.generate(&config).await;

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &GenerationReport) {
    println!();
    if report.has_failures() {
        println!("⚠️  Generation finished with failures:");
        for entry in report.failures() {
            let path = entry.target.relative_path();
            match &entry.outcome {
                TargetOutcome::DirectoryFailed { path: dir, error } => {
                    println!("   ❌ {} - could not create {}: {}", path.display(), dir.display(), error)
                }
                TargetOutcome::InvalidName { level, name } => {
                    println!("   ❌ {} - invalid {} name {:?}", path.display(), level, name)
                }
                TargetOutcome::ProvisionFailed { error } => {
                    println!("   ❌ {} - {}", path.display(), error)
                }
                TargetOutcome::Abandoned { failed_parent } => {
                    println!("   ⏭️  {} - {} failed earlier", path.display(), failed_parent.display())
                }
                _ => {}
            }
        }
    } else {
        println!("✅ Generation complete!");
    }

    println!();
    println!("  Provisioned: {}", report.provisioned());
    println!("  Skipped:     {}", report.skipped());
    println!("  Failed:      {}", report.failed());
    if let Some(ms) = report.duration_ms() {
        println!("  Duration:    {} ms", ms);
    }
}
