//! Configuration module for Sumi-Robots
//!
//! This module handles loading, parsing, and validating TOML configuration files
//! that identify the crawler and bound the crawl delays it honors.
//!
//! # Example
//!
//! ```no_run
//! use sumi_robots::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("robots.toml")).unwrap();
//! println!("Matching robots.txt as: {}", config.robots_token());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, PolitenessConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_str};
