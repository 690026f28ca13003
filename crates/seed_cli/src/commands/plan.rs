//! Plan command - Show the scaffolding plan without side effects.

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};

use seed_config::DEFAULT_CONFIG_PATH;
use seed_tree::{Decision, TreePlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct PlanArgs {
    /// Path to the scaffolding config
    #[arg(short, long, env = "TREESEED_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = PlanFormat::Text)]
    pub format: PlanFormat,
}

pub async fn execute(args: PlanArgs) -> Result<()> {
    let config = super::load_config(&args.config)?;
    let plan = TreePlan::build(&config);

    let output = match args.format {
        PlanFormat::Text => render_text(&plan),
        PlanFormat::Json => serde_json::to_string_pretty(&plan)?,
    };
    println!("{}", output);
    Ok(())
}

/// One line per combination in walk order: `+` is scaffolded, `-` excluded.
fn render_text(plan: &TreePlan) -> String {
    let mut out = String::new();
    for entry in plan.entries() {
        let path = entry.target.relative_path();
        let _ = match entry.decision {
            Decision::Provision => writeln!(
                out,
                "+ {}  [{}]",
                path.display(),
                entry.target.tags()
            ),
            Decision::Skip(reason) => writeln!(out, "- {}  ({})", path.display(), reason),
        };
    }

    let _ = write!(
        out,
        "\n{} to scaffold, {} excluded",
        plan.targets().count(),
        plan.skipped().count()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_config::{Configuration, Resource, Subscription};

    fn plan() -> TreePlan {
        TreePlan::build(
            &Configuration::new(["dev", "prod"], ["eu"]).with_subscription(
                Subscription::new("payments")
                    .with_resource(Resource::new("db").exclude_environment("prod")),
            ),
        )
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&plan());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "+ payments/dev/eu/db  [payments,db,eu,dev]");
        assert_eq!(lines[1], "- payments/prod/eu/db  (environment excluded)");
        assert_eq!(lines.last(), Some(&"1 to scaffold, 1 excluded"));
    }

    #[test]
    fn test_render_json() {
        let json = serde_json::to_value(plan()).unwrap();
        let entries = json["entries"].as_array().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["target"]["resource"], "db");
        assert_eq!(entries[0]["decision"]["action"], "provision");
        assert_eq!(entries[1]["decision"]["action"], "skip");
        assert_eq!(entries[1]["decision"]["reason"], "environment_excluded");
    }
}
