//! Exclusion filtering.

use serde::{Deserialize, Serialize};

use seed_config::Resource;

/// Why a (resource, environment, region) combination was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    EnvironmentExcluded,
    RegionExcluded,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvironmentExcluded => write!(f, "environment excluded"),
            Self::RegionExcluded => write!(f, "region excluded"),
        }
    }
}

/// Returns the reason `resource` must not be scaffolded in `environment` and
/// `region`, or `None` if it should be. The environment is checked first.
pub fn skip_reason(resource: &Resource, environment: &str, region: &str) -> Option<SkipReason> {
    if resource.exclude_from.excludes_environment(environment) {
        Some(SkipReason::EnvironmentExcluded)
    } else if resource.exclude_from.excludes_region(region) {
        Some(SkipReason::RegionExcluded)
    } else {
        None
    }
}

pub fn should_skip(resource: &Resource, environment: &str, region: &str) -> bool {
    skip_reason(resource, environment, region).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_exclusions_never_skips() {
        let resource = Resource::new("db");
        assert!(!should_skip(&resource, "prod", "eu"));
    }

    #[test]
    fn test_environment_exclusion() {
        let resource = Resource::new("db").exclude_environment("prod");

        assert_eq!(
            skip_reason(&resource, "prod", "eu"),
            Some(SkipReason::EnvironmentExcluded)
        );
        assert!(!should_skip(&resource, "dev", "eu"));
    }

    #[test]
    fn test_region_exclusion_ignores_case() {
        let resource = Resource::new("db").exclude_region("EU-WEST");

        assert_eq!(
            skip_reason(&resource, "dev", "eu-west"),
            Some(SkipReason::RegionExcluded)
        );
        assert!(!should_skip(&resource, "dev", "eu-north"));
    }

    #[test]
    fn test_environment_wins_when_both_match() {
        let resource = Resource::new("db")
            .exclude_environment("prod")
            .exclude_region("us");

        assert_eq!(
            skip_reason(&resource, "PROD", "US"),
            Some(SkipReason::EnvironmentExcluded)
        );
    }

    #[test]
    fn test_exclusion_needs_exact_match() {
        let resource = Resource::new("db").exclude_region("eu");
        assert!(!should_skip(&resource, "dev", "eu-west"));
    }
}
