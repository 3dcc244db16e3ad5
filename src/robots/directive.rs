//! Line-level lexing of robots.txt
//!
//! Splits raw bytes into lines, strips comments and turns each remaining
//! line into a [`Directive`]. Nothing here can fail: bytes that are not
//! valid UTF-8 are replaced, and lines that make no sense yield `None`.

use std::borrow::Cow;

/// One recognized `field: value` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    UserAgent(String),
    Disallow(String),
    Allow(String),
    /// `None` when the value is not a non-negative integer
    CrawlDelay(Option<u64>),
    Sitemap(String),
    /// A well-formed line whose field is not recognized; holds the field name
    Unknown(String),
}

impl Directive {
    /// Parses a single line, comments included
    ///
    /// # Returns
    ///
    /// * `Some(Directive)` - The line has the form `field: value`
    /// * `None` - The line is blank, a comment, or has no `:` separator
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            return None;
        }

        // Split at the first colon so that URL values keep theirs
        let (field, value) = line.split_once(':')?;
        let field = field.trim();
        let value = value.trim();

        let directive = match field.to_ascii_lowercase().as_str() {
            "user-agent" => Self::UserAgent(value.to_string()),
            "disallow" => Self::Disallow(value.to_string()),
            "allow" => Self::Allow(value.to_string()),
            "crawl-delay" => Self::CrawlDelay(value.parse::<u64>().ok()),
            "sitemap" => Self::Sitemap(value.to_string()),
            _ => Self::Unknown(field.to_string()),
        };
        Some(directive)
    }

    /// Returns true for directives that belong to the current group
    pub fn is_group_rule(&self) -> bool {
        matches!(
            self,
            Self::Disallow(_) | Self::Allow(_) | Self::CrawlDelay(_)
        )
    }
}

/// Removes a `#` comment and everything after it
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Iterates over the lines of `input`
///
/// CR, LF and CRLF all terminate a line. Trailing content without a
/// terminator is still yielded as a line.
pub fn split_lines(input: &[u8]) -> Lines<'_> {
    Lines { rest: input }
}

/// Iterator returned by [`split_lines`]
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Lines<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.rest;
        if input.is_empty() {
            return None;
        }

        let (line, rest) = match input.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(idx) => {
                let skip = if input[idx] == b'\r' && input.get(idx + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                (&input[..idx], &input[idx + skip..])
            }
            None => (input, &input[input.len()..]),
        };

        self.rest = rest;
        Some(String::from_utf8_lossy(line))
    }
}
