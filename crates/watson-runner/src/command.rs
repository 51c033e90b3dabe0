//! Search options → Sherlock command line.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::ffi::OsString;
use std::path::Path;

use watson_common::{Result, WatsonError};

/// Options sent by the UI alongside the usernames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Per-request timeout handed to the tool, in seconds. Sherlock takes a
    /// float, and the form may send it as a string.
    #[serde(deserialize_with = "deserialize_timeout")]
    pub timeout: Option<f64>,
    pub csv: bool,
    pub xlsx: bool,
    pub nsfw: bool,
    /// Also print sites where the username was not found.
    pub print_all: bool,
    /// Restrict the search to these site names.
    pub sites: Vec<String>,
    pub proxy: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn deserialize_timeout<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => return Ok(None),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("timeout must be a number of seconds, got {text:?}")))?,
    };
    if !seconds.is_finite() {
        return Err(de::Error::custom("timeout must be a finite number of seconds"));
    }
    Ok(Some(seconds))
}

/// Split the free-text username field on whitespace.
pub fn split_usernames(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Reject input the tool would misread as flags.
pub fn validate(usernames: &[String], options: &SearchOptions) -> Result<()> {
    if usernames.is_empty() {
        return Err(WatsonError::InvalidRequest("Please provide at least one username".into()));
    }
    if let Some(bad) = usernames.iter().find(|u| u.starts_with('-')) {
        return Err(WatsonError::InvalidRequest(format!("Invalid username: {bad}")));
    }
    if let Some(bad) = options.sites.iter().map(|s| s.trim()).find(|s| s.starts_with('-')) {
        return Err(WatsonError::InvalidRequest(format!("Invalid site name: {bad}")));
    }
    Ok(())
}

/// Build the argument list that follows the executable (and its prefix args).
///
/// The results folder is always passed last via `--folderoutput`.
pub fn build_args(
    usernames: &[String],
    options: &SearchOptions,
    folder: &Path,
    no_color: bool,
) -> Result<Vec<OsString>> {
    validate(usernames, options)?;

    let mut args: Vec<OsString> = usernames.iter().map(OsString::from).collect();

    if let Some(timeout) = options.timeout.filter(|t| *t > 0.0) {
        args.push("--timeout".into());
        args.push(timeout.to_string().into());
    }
    if options.csv {
        args.push("--csv".into());
    }
    if options.xlsx {
        args.push("--xlsx".into());
    }
    if options.nsfw {
        args.push("--nsfw".into());
    }
    if options.print_all {
        args.push("--print-all".into());
    }
    for site in options.sites.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        args.push("--site".into());
        args.push(site.into());
    }
    if let Some(proxy) = options.proxy.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        args.push("--proxy".into());
        args.push(proxy.into());
    }
    if no_color {
        args.push("--no-color".into());
    }

    args.push("--folderoutput".into());
    args.push(folder.as_os_str().to_owned());

    Ok(args)
}
