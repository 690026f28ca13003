//! Tag strings handed to the provisioner.

use std::fmt;

/// Identifying metadata for one leaf directory.
///
/// Renders as `subscription,resource,region,environment`. Downstream tooling
/// filters on these positions, so the order must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSet<'a> {
    pub subscription: &'a str,
    pub resource: &'a str,
    pub region: &'a str,
    pub environment: &'a str,
}

impl<'a> TagSet<'a> {
    pub fn new(subscription: &'a str, resource: &'a str, region: &'a str, environment: &'a str) -> Self {
        Self {
            subscription,
            resource,
            region,
            environment,
        }
    }

    pub fn as_array(&self) -> [&'a str; 4] {
        [self.subscription, self.resource, self.region, self.environment]
    }
}

impl fmt::Display for TagSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_array().join(","))
    }
}
