//! Crawl policy bound to the configured crawler
//!
//! Combines a parsed [`RuleSet`] with the crawler identity and delay bounds
//! from [`Config`]. Only computes answers; waiting between requests is up to
//! the caller.

use std::time::Duration;

use crate::config::{Config, PolitenessConfig};
use crate::robots::matcher::Verdict;
use crate::robots::rules::RuleSet;

/// Robots.txt rules as seen by the configured crawler
#[derive(Debug, Clone)]
pub struct CrawlPolicy {
    rules: RuleSet,
    agent: String,
    politeness: PolitenessConfig,
}

impl CrawlPolicy {
    /// Creates a policy for the crawler named in `config`
    ///
    /// # Arguments
    ///
    /// * `config` - Crawler configuration
    /// * `rules` - Parsed robots.txt for one site
    pub fn new(config: &Config, rules: RuleSet) -> Self {
        Self {
            rules,
            agent: config.robots_token(),
            politeness: config.politeness.clone(),
        }
    }

    /// Creates a permissive policy
    ///
    /// Used when a site has no robots.txt or it could not be fetched.
    pub fn allow_all(config: &Config) -> Self {
        Self::new(config, RuleSet::new())
    }

    /// Checks if the crawler may fetch `path`
    pub fn is_allowed(&self, path: &str) -> bool {
        self.rules.allowed(&self.agent, path)
    }

    /// Returns the full decision for `path`
    pub fn decide(&self, path: &str) -> Verdict {
        self.rules.decide(&self.agent, path)
    }

    /// Delay to keep between requests to this site
    ///
    /// The robots.txt `Crawl-delay` for the crawler (or `*`) capped at the
    /// configured maximum, or the configured default when none is declared.
    pub fn crawl_delay(&self) -> Duration {
        let seconds = match self.rules.crawl_delay(&self.agent) {
            Some(declared) if declared > self.politeness.max_crawl_delay => {
                tracing::debug!(
                    "Crawl-delay {}s exceeds maximum, using {}s",
                    declared,
                    self.politeness.max_crawl_delay
                );
                self.politeness.max_crawl_delay
            }
            Some(declared) => declared,
            None => self.politeness.default_crawl_delay,
        };
        Duration::from_secs(seconds)
    }

    /// Sitemap URLs declared by the site
    pub fn sitemaps(&self) -> &[String] {
        self.rules.sitemaps()
    }

    /// The agent token used for matching
    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// The underlying rule set
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
