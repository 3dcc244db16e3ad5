//! Sumi-Robots: robots.txt parsing and matching
//!
//! This crate turns the raw bytes of a robots.txt file into an immutable
//! [`RuleSet`] and answers, for a crawling agent and a request path, whether
//! that agent may fetch the path. It also exposes per-agent crawl delays and
//! the sitemap locations declared in the file.
//!
//! Fetching the file, caching it and enforcing politeness delays are left to
//! the caller.
//!
//! # Example
//!
//! ```
//! use sumi_robots::parse_str;
//!
//! let rules = parse_str("User-agent: *\nDisallow: /w/\nAllow: /w/load.php?\n");
//! assert!(rules.allowed("AnyBot", "/w/load.php?"));
//! assert!(!rules.allowed("AnyBot", "/w/index.php"));
//! ```

pub mod config;
pub mod robots;

use thiserror::Error;

/// Main error type for Sumi-Robots operations
///
/// Malformed robots.txt content is never an error; only failures to read the
/// input are reported. Configuration loading has its own [`ConfigError`].
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Sumi-Robots operations
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use robots::{
    parse, parse_bytes, parse_str, AgentRules, CrawlPolicy, MatchedRule, RuleKind, RuleSet,
    RuleSetBuilder, Verdict,
};
