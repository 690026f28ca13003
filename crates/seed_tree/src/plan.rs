//! Pure enumeration of the scaffolding cross-product.
//!
//! A [`TreePlan`] lists every (subscription, environment, region, resource)
//! tuple in walk order together with the exclusion decision for it. Building
//! a plan touches neither the filesystem nor the provisioner.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use seed_config::Configuration;

use crate::exclusion::{skip_reason, SkipReason};
use crate::tags::TagSet;

/// One resource instance in one environment and region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub subscription: String,
    pub environment: String,
    pub region: String,
    pub resource: String,
}

impl Target {
    pub fn new(
        subscription: impl Into<String>,
        environment: impl Into<String>,
        region: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            subscription: subscription.into(),
            environment: environment.into(),
            region: region.into(),
            resource: resource.into(),
        }
    }

    /// Path segments, parent first, labelled with the level they represent.
    pub fn segments(&self) -> [(&'static str, &str); 4] {
        [
            ("subscription", self.subscription.as_str()),
            ("environment", self.environment.as_str()),
            ("region", self.region.as_str()),
            ("resource", self.resource.as_str()),
        ]
    }

    /// `<subscription>/<environment>/<region>/<resource>`
    pub fn relative_path(&self) -> PathBuf {
        self.segments().iter().map(|(_, name)| *name).collect()
    }

    pub fn tags(&self) -> TagSet<'_> {
        TagSet::new(&self.subscription, &self.resource, &self.region, &self.environment)
    }
}

/// What the generator does with a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "reason", rename_all = "snake_case")]
pub enum Decision {
    Provision,
    Skip(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedEntry {
    pub target: Target,
    pub decision: Decision,
}

/// Ordered scaffolding plan for a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreePlan {
    entries: Vec<PlannedEntry>,
}

impl TreePlan {
    /// Walk subscriptions, then environments, then regions, then the
    /// subscription's resources, each in configuration order.
    pub fn build(config: &Configuration) -> Self {
        let mut entries = Vec::with_capacity(config.combination_count());

        for subscription in &config.subscriptions {
            for environment in &config.environments {
                for region in &config.regions {
                    for resource in &subscription.resources {
                        let decision = match skip_reason(resource, environment, region) {
                            Some(reason) => Decision::Skip(reason),
                            None => Decision::Provision,
                        };
                        entries.push(PlannedEntry {
                            target: Target::new(
                                &subscription.name,
                                environment,
                                region,
                                &resource.name,
                            ),
                            decision,
                        });
                    }
                }
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[PlannedEntry] {
        &self.entries
    }

    /// Targets that will be scaffolded, in walk order.
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.entries
            .iter()
            .filter(|e| e.decision == Decision::Provision)
            .map(|e| &e.target)
    }

    /// Excluded targets with the reason they were left out.
    pub fn skipped(&self) -> impl Iterator<Item = (&Target, SkipReason)> {
        self.entries.iter().filter_map(|e| match e.decision {
            Decision::Skip(reason) => Some((&e.target, reason)),
            Decision::Provision => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
