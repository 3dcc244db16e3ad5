//! Robots.txt handling module
//!
//! This module parses robots.txt content into an immutable [`RuleSet`] and
//! answers allow/deny questions against it using longest-prefix matching.

mod agent;
mod directive;
mod matcher;
mod parser;
mod policy;
mod rules;

pub use agent::{normalize_agent, AgentRules};
pub use directive::{split_lines, strip_comment, Directive, Lines};
pub use matcher::{MatchedRule, RuleKind, Verdict};
pub use parser::{parse, parse_bytes, parse_str};
pub use policy::CrawlPolicy;
pub use rules::{RuleSet, RuleSetBuilder, WILDCARD_AGENT};
