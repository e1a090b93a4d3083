//! Configuration loading and parsing.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Configuration File Locations
//!
//! `EXTPROV_CONFIG` names a single file that is loaded without merging.
//! Otherwise these are merged in order:
//! 1. User global config (`~/.extprov/config.yml`)
//! 2. Project config (`.extprov/config.yml`)
//! 3. Local overrides (`.extprov/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;

pub use schema::{HostSettings, ProvisionConfig};

pub use loader::{
    config_override_from_env, load_config, load_config_file, load_config_value,
    load_merged_config, parse_config, ConfigPaths, CONFIG_ENV_VAR,
};

pub use merger::{deep_merge, merge_configs};
