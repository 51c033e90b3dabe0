use serde::{Deserialize, Serialize};

/// An account the tool reported as existing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundAccount {
    pub site: String,
    pub url: String,
}

/// Tool output sorted into the three buckets shown in the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResults {
    pub found: Vec<FoundAccount>,
    pub not_found: Vec<String>,
    pub checking: Vec<String>,
}

impl ParsedResults {
    pub fn is_empty(&self) -> bool {
        self.found.is_empty() && self.not_found.is_empty() && self.checking.is_empty()
    }
}
