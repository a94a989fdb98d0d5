//! Configuration module for Wiki Time Travel
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every field has a default, so a missing file simply means [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use wiki_time_travel::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("time-travel.toml")).unwrap();
//! println!("API endpoint: {}", config.site.api_url("en"));
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, SiteConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
