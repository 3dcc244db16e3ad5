//! Allow/deny decisions
//!
//! The applicable group is the agent's own entries if it has any, otherwise
//! the wildcard group. Within that group the longest prefix matching the path
//! wins, no matter where it appears in the file. When an allow and a disallow
//! prefix of the same length both match, the allow wins.

use crate::robots::agent::normalize_agent;
use crate::robots::rules::{RuleSet, WILDCARD_AGENT};

/// Which list a matched prefix came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Allow,
    Disallow,
}

/// The prefix that decided a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRule {
    pub kind: RuleKind,
    pub prefix: String,
}

/// Outcome of matching one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the path may be fetched
    pub allowed: bool,
    /// The winning rule, or `None` when no prefix matched
    pub matched: Option<MatchedRule>,
}

impl Verdict {
    fn default_allow() -> Self {
        Self {
            allowed: true,
            matched: None,
        }
    }
}

impl RuleSet {
    /// Checks if `agent` may fetch `path`
    ///
    /// # Arguments
    ///
    /// * `agent` - The agent token, compared case-insensitively
    /// * `path` - The request path, compared byte-wise without decoding
    ///
    /// # Returns
    ///
    /// * `true` - If the path is allowed, or no rule applies
    /// * `false` - If the longest matching prefix is a disallow
    pub fn allowed(&self, agent: &str, path: &str) -> bool {
        self.decide(agent, path).allowed
    }

    /// Matches `path` for `agent` and reports the winning rule
    pub fn decide(&self, agent: &str, path: &str) -> Verdict {
        let agent = normalize_agent(agent);
        let group = if self.has_rules_for(&agent) {
            agent.as_str()
        } else if self.has_rules_for(WILDCARD_AGENT) {
            WILDCARD_AGENT
        } else {
            return Verdict::default_allow();
        };

        let disallow = longest_match(self.disallow_for(group), path);
        let allow = longest_match(self.allow_for(group), path);

        let matched = match (allow, disallow) {
            (Some(a), Some(d)) if d.len() > a.len() => Some((RuleKind::Disallow, d)),
            (Some(a), _) => Some((RuleKind::Allow, a)),
            (None, Some(d)) => Some((RuleKind::Disallow, d)),
            (None, None) => None,
        };

        let verdict = match matched {
            Some((kind, prefix)) => Verdict {
                allowed: kind == RuleKind::Allow,
                matched: Some(MatchedRule {
                    kind,
                    prefix: prefix.to_string(),
                }),
            },
            None => Verdict::default_allow(),
        };

        tracing::trace!(
            "robots match agent={} group={} path={} allowed={}",
            agent,
            group,
            path,
            verdict.allowed
        );
        verdict
    }
}

/// Longest prefix in `prefixes` that `path` starts with
fn longest_match<'a>(prefixes: &'a [String], path: &str) -> Option<&'a str> {
    prefixes
        .iter()
        .filter(|prefix| path.as_bytes().starts_with(prefix.as_bytes()))
        .max_by_key(|prefix| prefix.len())
        .map(String::as_str)
}
