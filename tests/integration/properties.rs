//! Property-based tests for the parser
//!
//! Any byte sequence must parse without error, and parsing must be a pure
//! function of its input.

use proptest::prelude::*;
use sumi_robots::{parse, parse_bytes, parse_str, RuleSet};

/// Strategy for lines that look like robots.txt, with some noise mixed in
fn robots_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z*. -]{0,12}".prop_map(|a| format!("User-agent: {}", a)),
        "/[ -~]{0,16}".prop_map(|p| format!("Disallow: {}", p)),
        "/[ -~]{0,16}".prop_map(|p| format!("Allow: {}", p)),
        "[0-9a-z.+-]{0,4}".prop_map(|d| format!("Crawl-delay: {}", d)),
        "http://[a-z]{1,8}\\.org/[a-z]{0,8}".prop_map(|u| format!("Sitemap: {}", u)),
        "#[ -~]{0,20}",
        "\\PC{0,30}",
        Just(String::new()),
    ]
}

fn robots_file_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(robots_line_strategy(), 0..40),
        prop_oneof![Just("\n"), Just("\r\n"), Just("\r")],
    )
        .prop_map(|(lines, terminator)| lines.join(terminator))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn parse_accepts_any_bytes(bytes in prop::collection::vec(any::<u8>(), 0..4096)) {
        prop_assert!(parse(bytes.as_slice()).is_ok());
    }

    #[test]
    fn parse_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..1024)) {
        prop_assert_eq!(parse_bytes(&bytes), parse_bytes(&bytes));
    }

    #[test]
    fn structured_files_never_fail(content in robots_file_strategy()) {
        let rules = parse(content.as_bytes()).expect("reading from a slice cannot fail");
        prop_assert_eq!(&rules, &parse_str(&content));
    }

    #[test]
    fn empty_rules_allow_everything(agent in "\\PC{0,20}", path in "\\PC{0,40}") {
        prop_assert!(parse_bytes(&[]).allowed(&agent, &path));
        prop_assert!(RuleSet::new().allowed(&agent, &path));
    }

    #[test]
    fn disallow_root_blocks_every_path(agent in "[A-Za-z]{1,12}", path in "/[ -~]{0,40}") {
        let rules = parse_str(&format!("User-agent: {}\nDisallow: /\n", agent));
        prop_assert!(!rules.allowed(&agent, &path));
    }

    #[test]
    fn empty_disallow_grants_every_path(agent in "[A-Za-z]{1,12}", path in "/[ -~]{0,40}") {
        let rules = parse_str(&format!("User-agent: {}\nDisallow:\n", agent));
        prop_assert!(rules.allowed(&agent, &path));
    }

    #[test]
    fn longer_allow_overrides_disallow(dir in "[a-z]{1,8}", rest in "[a-z?=&]{1,12}") {
        let rules = parse_str(&format!(
            "User-agent: *\nAllow: /{dir}/{rest}\nDisallow: /{dir}/\n"
        ));
        let allowed_path = format!("/{}/{}", dir, rest);
        let blocked_path = format!("/{}/", dir);
        prop_assert!(rules.allowed("anybot", &allowed_path));
        prop_assert!(!rules.allowed("anybot", &blocked_path));
    }
}
