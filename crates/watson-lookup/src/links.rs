//! Fixed URL templates for search engines and social networks.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use watson_common::{Result, WatsonError};
use crate::variants::{tokenize, username_variants};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupLinks {
    pub name: String,
    pub tokens: Vec<String>,
    pub variants: Vec<String>,
    pub search_engines: Vec<Link>,
    pub social_networks: Vec<Link>,
}

/// (label, URL prefix ending right before the query, URL suffix)
type Template = (&'static str, &'static str, &'static str);

const SEARCH_ENGINES: &[Template] = &[
    ("Google",     "https://www.google.com/search?q=", ""),
    ("Bing",       "https://www.bing.com/search?q=",   ""),
    ("DuckDuckGo", "https://duckduckgo.com/?q=",       ""),
    ("Yandex",     "https://yandex.com/search/?text=", ""),
];

const SOCIAL_NETWORKS: &[Template] = &[
    ("Facebook",  "https://www.facebook.com/search/people/?q=",           ""),
    ("LinkedIn",  "https://www.linkedin.com/search/results/people/?keywords=", ""),
    ("X",         "https://x.com/search?q=",                              "&f=user"),
    ("Instagram", "https://www.instagram.com/explore/search/keyword/?q=", ""),
    ("Reddit",    "https://www.reddit.com/search/?q=",                    "&type=user"),
    ("GitHub",    "https://github.com/search?q=",                         "&type=users"),
    ("TikTok",    "https://www.tiktok.com/search/user?q=",                ""),
];

fn encode(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

fn render(templates: &[Template], query: &str) -> Vec<Link> {
    let encoded = encode(query);
    templates
        .iter()
        .map(|(label, prefix, suffix)| Link {
            label: label.to_string(),
            url: format!("{prefix}{encoded}{suffix}"),
        })
        .collect()
}

/// Build every lookup link for `name`.
///
/// Search engines get the exact phrase in quotes; social networks get the
/// bare tokens.
pub fn build_lookup(name: &str) -> Result<LookupLinks> {
    let tokens = tokenize(name);
    if tokens.is_empty() {
        return Err(WatsonError::InvalidRequest("Please provide a name".into()));
    }
    let query = tokens.join(" ");

    Ok(LookupLinks {
        name: name.trim().to_string(),
        variants: username_variants(&tokens),
        search_engines: render(SEARCH_ENGINES, &format!("\"{query}\"")),
        social_networks: render(SOCIAL_NETWORKS, &query),
        tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use url::Url;

    #[test]
    fn test_search_engine_links_quote_the_name() {
        let lookup = build_lookup("John Smith").unwrap();
        assert_eq!(
            lookup.search_engines[0],
            Link {
                label: "Google".into(),
                url: "https://www.google.com/search?q=%22john+smith%22".into(),
            }
        );
        assert_eq!(lookup.search_engines.len(), SEARCH_ENGINES.len());
    }

    #[test]
    fn test_social_links_keep_suffix() {
        let lookup = build_lookup("John Smith").unwrap();
        let x = lookup.social_networks.iter().find(|l| l.label == "X").unwrap();
        assert_eq!(x.url, "https://x.com/search?q=john+smith&f=user");
    }

    #[test]
    fn test_every_link_parses_and_carries_the_query() {
        let lookup = build_lookup("Zoë & Co").unwrap();
        for link in lookup.search_engines.iter().chain(&lookup.social_networks) {
            let url = Url::parse(&link.url).unwrap();
            assert_eq!(url.scheme(), "https");
            let values: Vec<String> = url.query_pairs().map(|(_, v)| v.into_owned()).collect();
            assert!(
                values.iter().any(|v| v.contains("zoë co")),
                "{} lost the query: {}",
                link.label,
                link.url
            );
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = build_lookup("  ?! ").unwrap_err();
        assert_eq!(err.to_string(), "Please provide a name");
    }

    #[test]
    fn test_serializes_for_api() {
        let value = serde_json::to_value(build_lookup("Ada").unwrap()).unwrap();
        assert_eq!(value["variants"], serde_json::json!(["ada"]));
        assert_eq!(value["tokens"], serde_json::json!(["ada"]));
        assert_eq!(value["name"], "Ada");
    }
}
