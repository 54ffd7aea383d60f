//! Configuration loading.
//!
//! This module handles parsing the resolver's TOML configuration file and
//! validating its contents before resolution starts.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::MetadataConfig;
