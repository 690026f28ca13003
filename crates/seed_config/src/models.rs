//! Data models for the scaffolding configuration.

use serde::{Deserialize, Serialize};

/// Root configuration document.
///
/// The three top-level sequences are required. Their order drives the order
/// in which the tree is walked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Configuration {
    pub subscriptions: Vec<Subscription>,
    pub environments: Vec<String>,
    pub regions: Vec<String>,
}

impl Configuration {
    pub fn new<E, R>(environments: E, regions: R) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            subscriptions: Vec::new(),
            environments: environments.into_iter().map(Into::into).collect(),
            regions: regions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscriptions.push(subscription);
        self
    }

    /// Number of (subscription, environment, region, resource) tuples before
    /// exclusions are applied.
    pub fn combination_count(&self) -> usize {
        let resources: usize = self.subscriptions.iter().map(|s| s.resources.len()).sum();
        resources * self.environments.len() * self.regions.len()
    }
}

/// A top-level organizational unit, scaffolded as the first path segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subscription {
    pub name: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Subscription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: Vec::new(),
        }
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }
}

/// A unit of infrastructure scaffolded per environment and region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    #[serde(default, rename = "exclude-from")]
    pub exclude_from: ExclusionRule,
}

impl Resource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exclude_from: ExclusionRule::default(),
        }
    }

    pub fn exclude_environment(mut self, environment: impl Into<String>) -> Self {
        self.exclude_from.environments.push(environment.into());
        self
    }

    pub fn exclude_region(mut self, region: impl Into<String>) -> Self {
        self.exclude_from.regions.push(region.into());
        self
    }
}

/// Environments and regions a resource must not be scaffolded in.
///
/// Matching is case-insensitive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExclusionRule {
    #[serde(default)]
    pub environments: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
}

impl ExclusionRule {
    pub fn excludes_environment(&self, environment: &str) -> bool {
        contains_folded(&self.environments, environment)
    }

    pub fn excludes_region(&self, region: &str) -> bool {
        contains_folded(&self.regions, region)
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty() && self.regions.is_empty()
    }
}

fn contains_folded(entries: &[String], value: &str) -> bool {
    entries.iter().any(|entry| eq_folded(entry, value))
}

/// Char-by-char simple case folding: `ς`, `σ` and `Σ` are equal, as are the
/// Kelvin sign and `k`, while `ß` never matches `ss`.
fn eq_folded(a: &str, b: &str) -> bool {
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

fn fold_char(c: char) -> char {
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase()).unwrap_or(upper)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_matches_ignoring_case() {
        let rule = Resource::new("db")
            .exclude_environment("Prod")
            .exclude_region("EU-WEST")
            .exclude_from;

        assert!(rule.excludes_environment("prod"));
        assert!(rule.excludes_environment("PROD"));
        assert!(rule.excludes_region("eu-west"));
        assert!(!rule.excludes_region("eu-north"));
        assert!(!rule.excludes_environment("dev"));
    }

    #[test]
    fn test_exclusion_uses_simple_case_folding() {
        let rule = ExclusionRule {
            environments: vec!["ΣΤΑΓΕς".to_string()],
            regions: vec!["\u{212A}r".to_string(), "straße".to_string()],
        };

        assert!(rule.excludes_environment("σταγεσ"));
        assert!(rule.excludes_environment("ΣΤΑΓΕΣ"));
        assert!(rule.excludes_region("kr"));
        assert!(rule.excludes_region("KR"));
        assert!(rule.excludes_region("STRAßE"));
        assert!(!rule.excludes_region("strasse"));
    }

    #[test]
    fn test_empty_rule_excludes_nothing() {
        let rule = ExclusionRule::default();
        assert!(rule.is_empty());
        assert!(!rule.excludes_environment("dev"));
        assert!(!rule.excludes_region(""));
    }

    #[test]
    fn test_combination_count() {
        let config = Configuration::new(["dev", "prod"], ["eu", "us", "ap"])
            .with_subscription(
                Subscription::new("payments")
                    .with_resource(Resource::new("db"))
                    .with_resource(Resource::new("cache")),
            )
            .with_subscription(Subscription::new("identity").with_resource(Resource::new("vault")));

        assert_eq!(config.combination_count(), 3 * 2 * 3);
    }
}
