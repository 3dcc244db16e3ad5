//! Per-agent view over a rule set

use crate::robots::matcher::Verdict;
use crate::robots::rules::RuleSet;

/// Normalizes an agent token for lookup: trimmed and lower-cased
pub fn normalize_agent(agent: &str) -> String {
    agent.trim().to_lowercase()
}

/// A [`RuleSet`] bound to a single agent
///
/// Lets a crawler resolve its identity once and then query many paths.
#[derive(Debug, Clone)]
pub struct AgentRules<'a> {
    rules: &'a RuleSet,
    agent: String,
}

impl<'a> AgentRules<'a> {
    pub(crate) fn new(rules: &'a RuleSet, agent: &str) -> Self {
        Self {
            rules,
            agent: normalize_agent(agent),
        }
    }

    /// The normalized agent token this view answers for
    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// Checks if the agent may fetch `path`
    pub fn allowed(&self, path: &str) -> bool {
        self.rules.allowed(&self.agent, path)
    }

    /// Returns the full decision for `path`, including the winning rule
    pub fn decide(&self, path: &str) -> Verdict {
        self.rules.decide(&self.agent, path)
    }

    /// Crawl delay in seconds for the agent, if any was declared
    pub fn crawl_delay(&self) -> Option<u64> {
        self.rules.crawl_delay(&self.agent)
    }
}

impl RuleSet {
    /// Binds this rule set to an agent
    pub fn for_agent(&self, agent: &str) -> AgentRules<'_> {
        AgentRules::new(self, agent)
    }
}
