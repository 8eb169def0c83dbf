//! URL fragment parsing.
//!
//! # Responsibilities
//! - Strip a single leading `#`
//! - Split the path portion into `/`-separated tokens (empty segments dropped)
//! - Parse the `?` suffix into ordered key/value search params
//!
//! # Design Decisions
//! - Tokens and search params are always derived together from one value
//! - Duplicate search keys are kept; folding into a map is the caller's job
//! - No error conditions: malformed input degrades to empty keys/values

use serde::{Deserialize, Serialize};

/// A single `key=value` pair from the search portion of a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParam {
    pub key: String,
    pub value: String,
}

impl SearchParam {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A parsed URL fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hash {
    value: String,
    tokens: Vec<String>,
    search: Vec<SearchParam>,
}

impl Hash {
    /// Create an empty hash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hash from a raw fragment.
    pub fn parse(raw: &str) -> Self {
        let mut hash = Self::new();
        hash.set_value(raw);
        hash
    }

    /// Replace the fragment, re-deriving tokens and search params.
    pub fn set_value(&mut self, raw: &str) {
        let raw = raw.strip_prefix('#').unwrap_or(raw);

        let (path, search) = match raw.find('?') {
            Some(index) => (&raw[..index], Some(&raw[index + 1..])),
            None => (raw, None),
        };

        self.tokens = parse_tokens(path);
        self.search = search.map(parse_search).unwrap_or_default();
        self.value = raw.to_string();
    }

    /// Like [`Hash::set_value`], treating `None` as an empty fragment.
    pub fn set_optional(&mut self, raw: Option<&str>) {
        self.set_value(raw.unwrap_or_default());
    }

    /// The fragment without its leading `#`.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn search(&self) -> &[SearchParam] {
        &self.search
    }
}

fn parse_tokens(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_search(search: &str) -> Vec<SearchParam> {
    search.split('&').map(parse_search_pair).collect()
}

fn parse_search_pair(pair: &str) -> SearchParam {
    match pair.split_once('=') {
        Some((key, value)) => SearchParam::new(key, value),
        None => SearchParam::new(pair, ""),
    }
}
