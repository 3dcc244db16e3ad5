//! Robots.txt parser implementation
//!
//! Turns raw bytes into a [`RuleSet`]. Any byte sequence is accepted: lines
//! that cannot be understood are skipped, never reported as errors.

use std::io::Read;
use std::str::FromStr;

use crate::robots::directive::{split_lines, Directive};
use crate::robots::rules::RuleSet;
use crate::Result;

/// Group tracking state while walking the file
#[derive(Debug, Default)]
struct GroupState {
    /// Agents named by the current group
    agents: Vec<String>,
    /// Set once a rule or sitemap line follows the agents; the next `User-agent` opens a new group
    closed: bool,
}

impl GroupState {
    fn add_agent(&mut self, agent: &str) {
        if self.closed {
            self.agents.clear();
            self.closed = false;
        }
        self.agents.push(agent.to_string());
    }
}

/// Parses robots.txt from a reader
///
/// # Arguments
///
/// * `reader` - Source of the raw robots.txt bytes
///
/// # Returns
///
/// * `Ok(RuleSet)` - The parsed rules, possibly empty
/// * `Err(RobotsError)` - Reading from `reader` failed
pub fn parse<R: Read>(mut reader: R) -> Result<RuleSet> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(parse_bytes(&bytes))
}

/// Parses robots.txt from a string
pub fn parse_str(content: &str) -> RuleSet {
    parse_bytes(content.as_bytes())
}

/// Parses robots.txt from raw bytes
///
/// Invalid UTF-8, binary garbage and malformed lines are tolerated. The
/// result for the same bytes is always the same.
pub fn parse_bytes(input: &[u8]) -> RuleSet {
    let mut builder = RuleSet::builder();
    let mut group = GroupState::default();
    let mut skipped = 0usize;

    for (idx, line) in split_lines(input).enumerate() {
        let line_no = idx + 1;
        let Some(directive) = Directive::parse_line(&line) else {
            continue;
        };

        if directive.is_group_rule() {
            if group.agents.is_empty() {
                tracing::trace!("Line {}: rule outside of any user-agent group", line_no);
                skipped += 1;
                continue;
            }
            group.closed = true;
        }

        match directive {
            Directive::UserAgent(agent) => group.add_agent(&agent),
            Directive::Disallow(prefix) => {
                for agent in &group.agents {
                    builder.push_disallow(agent, &prefix);
                }
            }
            Directive::Allow(prefix) => {
                for agent in &group.agents {
                    builder.push_allow(agent, &prefix);
                }
            }
            Directive::CrawlDelay(Some(seconds)) => {
                for agent in &group.agents {
                    builder.put_crawl_delay(agent, seconds);
                }
            }
            Directive::CrawlDelay(None) => {
                tracing::debug!("Line {}: ignoring invalid Crawl-delay value", line_no);
                skipped += 1;
            }
            Directive::Sitemap(url) => {
                // Global, but still ends the current group's agent list
                if !group.agents.is_empty() {
                    group.closed = true;
                }
                builder.push_sitemap(&url);
            }
            Directive::Unknown(field) => {
                tracing::trace!("Line {}: ignoring unknown field '{}'", line_no, field);
                skipped += 1;
            }
        }
    }

    let rules = builder.build();
    tracing::debug!(
        "Parsed robots.txt: {} agents, {} sitemaps, {} lines skipped",
        rules.agents().len(),
        rules.sitemaps().len(),
        skipped
    );
    rules
}

impl FromStr for RuleSet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(parse_str(s))
    }
}
