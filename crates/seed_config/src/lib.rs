//! # seed_config
//!
//! Scaffolding configuration for treeseed.
//!
//! This crate holds the declarative model of subscriptions, environments,
//! regions and resources, and loads it from a YAML document.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seed_config::{ConfigLoader, DEFAULT_CONFIG_PATH};
//!
//! let config = ConfigLoader::load(DEFAULT_CONFIG_PATH).unwrap();
//! for subscription in &config.subscriptions {
//!     println!("{}: {} resources", subscription.name, subscription.resources.len());
//! }
//! ```

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use models::{Configuration, ExclusionRule, Resource, Subscription};
