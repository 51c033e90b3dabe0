//! Sherlock output → found / not-found / checking buckets.
//!
//! The tool prefixes its progress lines with `[+]` (account exists),
//! `[-]` (no account) and `[*]` (status messages). Everything else is noise.

use regex::Regex;
use std::sync::LazyLock;

use watson_common::{FoundAccount, ParsedResults};

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("valid ANSI regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Found(FoundAccount),
    NotFound(String),
    Checking(String),
}

/// Classify a single line of output.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let clean = ANSI_ESCAPE.replace_all(line, "");
    let clean = clean.trim_end_matches(['\r', '\n']);

    if let Some(rest) = clean.strip_prefix("[+]") {
        let (site, url) = rest.trim_start().split_once(": ")?;
        return Some(ParsedLine::Found(FoundAccount {
            site: site.trim().to_string(),
            url: url.trim().to_string(),
        }));
    }
    if let Some(rest) = clean.strip_prefix("[-]") {
        let site = rest.trim();
        return (!site.is_empty()).then(|| ParsedLine::NotFound(site.to_string()));
    }
    if let Some(rest) = clean.strip_prefix("[*]") {
        let msg = rest.trim();
        return (!msg.is_empty()).then(|| ParsedLine::Checking(msg.to_string()));
    }
    None
}

/// Parse the whole buffered output of a search.
pub fn parse_output(output: &str) -> ParsedResults {
    let mut results = ParsedResults::default();
    for parsed in output.lines().filter_map(parse_line) {
        match parsed {
            ParsedLine::Found(account) => results.found.push(account),
            ParsedLine::NotFound(site) => results.not_found.push(site),
            ParsedLine::Checking(msg)  => results.checking.push(msg),
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
[*] Checking username alice on:
[+] GitHub: https://www.github.com/alice
[+] Reddit: https://www.reddit.com/user/alice
[-] MySpace: Not Found!
[+] broken line without separator
random banner text
[*] Search completed with 2 results
";

    #[test]
    fn test_buckets() {
        let results = parse_output(SAMPLE);
        assert_eq!(
            results.found,
            vec![
                FoundAccount { site: "GitHub".into(), url: "https://www.github.com/alice".into() },
                FoundAccount { site: "Reddit".into(), url: "https://www.reddit.com/user/alice".into() },
            ]
        );
        assert_eq!(results.not_found, vec!["MySpace: Not Found!"]);
        assert_eq!(
            results.checking,
            vec!["Checking username alice on:", "Search completed with 2 results"]
        );
    }

    #[test]
    fn test_url_keeps_later_separators() {
        let line = "[+] Example: https://example.com/?q=a: b";
        assert_eq!(
            parse_line(line),
            Some(ParsedLine::Found(FoundAccount {
                site: "Example".into(),
                url: "https://example.com/?q=a: b".into(),
            }))
        );
    }

    #[test]
    fn test_colored_and_crlf_lines() {
        let line = "\x1b[1;37m[\x1b[92;1m+\x1b[1;37m]\x1b[0m GitHub: https://github.com/alice\r";
        assert_eq!(
            parse_line(line),
            Some(ParsedLine::Found(FoundAccount {
                site: "GitHub".into(),
                url: "https://github.com/alice".into(),
            }))
        );
    }

    #[test]
    fn test_prefix_must_start_line() {
        assert_eq!(parse_line("  [+] GitHub: https://github.com/alice"), None);
        assert_eq!(parse_line("[-]   "), None);
        assert!(parse_output("").is_empty());
    }
}
