//! The parsed robots.txt value
//!
//! A [`RuleSet`] is produced once by the parser and never mutated afterwards,
//! so it can be shared freely between threads. Construction goes through
//! [`RuleSetBuilder`].

use std::collections::{BTreeSet, HashMap};

use crate::robots::agent::normalize_agent;

/// The wildcard agent token
pub const WILDCARD_AGENT: &str = "*";

/// Parsed robots.txt rules
///
/// Agent keys are stored lower-cased. Rule lists keep file order, which only
/// matters for iteration: matching is longest-prefix, not first-match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    crawl_delay: HashMap<String, u64>,
    disallow: HashMap<String, Vec<String>>,
    allow: HashMap<String, Vec<String>>,
    sitemaps: Vec<String>,
}

impl RuleSet {
    /// Creates an empty rule set, which allows everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a rule set
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Gets the crawl delay for an agent
    ///
    /// Looks up the exact (lower-cased) agent token first, then the wildcard
    /// `*`. `None` means no delay was specified, which is distinct from
    /// `Some(0)`.
    ///
    /// # Arguments
    ///
    /// * `agent` - The agent token, compared case-insensitively
    pub fn crawl_delay(&self, agent: &str) -> Option<u64> {
        let agent = normalize_agent(agent);
        self.crawl_delay
            .get(&agent)
            .or_else(|| self.crawl_delay.get(WILDCARD_AGENT))
            .copied()
    }

    /// All crawl delays, keyed by agent token
    pub fn crawl_delays(&self) -> &HashMap<String, u64> {
        &self.crawl_delay
    }

    /// All disallow prefixes, keyed by agent token
    pub fn disallow(&self) -> &HashMap<String, Vec<String>> {
        &self.disallow
    }

    /// All allow prefixes, keyed by agent token
    pub fn allow(&self) -> &HashMap<String, Vec<String>> {
        &self.allow
    }

    /// Sitemap URLs in file order, duplicates included
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    /// Returns true if the file declared nothing usable
    pub fn is_empty(&self) -> bool {
        self.crawl_delay.is_empty()
            && self.disallow.is_empty()
            && self.allow.is_empty()
            && self.sitemaps.is_empty()
    }

    /// Agent tokens that carry at least one rule or crawl delay, sorted
    pub fn agents(&self) -> Vec<&str> {
        let agents: BTreeSet<&str> = self
            .crawl_delay
            .keys()
            .chain(self.disallow.keys())
            .chain(self.allow.keys())
            .map(String::as_str)
            .collect();
        agents.into_iter().collect()
    }

    /// Returns true if the agent has its own allow or disallow entries
    pub(crate) fn has_rules_for(&self, agent: &str) -> bool {
        self.disallow.contains_key(agent) || self.allow.contains_key(agent)
    }

    pub(crate) fn disallow_for(&self, agent: &str) -> &[String] {
        self.disallow.get(agent).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn allow_for(&self, agent: &str) -> &[String] {
        self.allow.get(agent).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Builder for [`RuleSet`]
///
/// The parser feeds directives through this type; tests use it to spell out
/// expected values.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    /// Adds a disallow prefix for an agent
    ///
    /// An empty prefix means "disallow nothing" and adds no rule.
    pub fn add_disallow(mut self, agent: &str, prefix: &str) -> Self {
        self.push_disallow(agent, prefix);
        self
    }

    /// Adds an allow prefix for an agent
    ///
    /// An empty prefix is kept; it matches every path.
    pub fn add_allow(mut self, agent: &str, prefix: &str) -> Self {
        self.push_allow(agent, prefix);
        self
    }

    /// Sets the crawl delay for an agent, replacing any earlier value
    pub fn set_crawl_delay(mut self, agent: &str, seconds: u64) -> Self {
        self.put_crawl_delay(agent, seconds);
        self
    }

    /// Appends a sitemap URL
    pub fn add_sitemap(mut self, url: &str) -> Self {
        self.push_sitemap(url);
        self
    }

    /// Finishes the rule set
    pub fn build(self) -> RuleSet {
        self.rules
    }

    pub(crate) fn push_disallow(&mut self, agent: &str, prefix: &str) {
        if prefix.is_empty() {
            return;
        }
        self.rules
            .disallow
            .entry(normalize_agent(agent))
            .or_default()
            .push(prefix.to_string());
    }

    pub(crate) fn push_allow(&mut self, agent: &str, prefix: &str) {
        self.rules
            .allow
            .entry(normalize_agent(agent))
            .or_default()
            .push(prefix.to_string());
    }

    pub(crate) fn put_crawl_delay(&mut self, agent: &str, seconds: u64) {
        self.rules
            .crawl_delay
            .insert(normalize_agent(agent), seconds);
    }

    pub(crate) fn push_sitemap(&mut self, url: &str) {
        self.rules.sitemaps.push(url.to_string());
    }
}
