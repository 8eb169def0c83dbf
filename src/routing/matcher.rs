//! Route matching logic.
//!
//! # Responsibilities
//! - Compile a pattern into static and dynamic tokens
//! - Match a single token against a fragment token
//! - Combine token conditions with AND semantics
//!
//! # Design Decisions
//! - Static tokens match case-insensitively
//! - Dynamic tokens (`{name}`) match any non-empty fragment token
//! - Token counts must be equal: no wildcards, no optional segments
//! - No regex to guarantee O(n) matching

use crate::routing::hash::Hash;

/// Trait for matching fragments against conditions.
pub trait Matcher: std::fmt::Debug {
    /// Returns true if the fragment matches this condition.
    fn matches(&self, hash: &Hash) -> bool;
}

/// One `/`-separated segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteToken {
    /// Literal text for static tokens, the capture name for dynamic ones.
    pub name: String,
    pub is_dynamic: bool,
    /// Lowercased static name, folded once at compile time.
    folded: String,
}

impl RouteToken {
    /// Classify a single, non-empty pattern segment.
    pub fn parse(segment: &str) -> Self {
        match dynamic_name(segment) {
            Some(name) => Self {
                name: name.to_string(),
                is_dynamic: true,
                folded: String::new(),
            },
            None => Self {
                name: segment.to_string(),
                is_dynamic: false,
                folded: segment.to_lowercase(),
            },
        }
    }

    /// Returns true if this token accepts the given fragment token.
    pub fn accepts(&self, token: &str) -> bool {
        self.is_dynamic
            || self
                .folded
                .chars()
                .eq(token.chars().flat_map(char::to_lowercase))
    }
}

/// Returns the capture name if `segment` is exactly `{letters}`.
pub fn dynamic_name(segment: &str) -> Option<&str> {
    let name = segment.strip_prefix('{')?.strip_suffix('}')?;
    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(name)
    } else {
        None
    }
}

/// Returns true if `segment` is brace-delimited but not a valid dynamic token.
pub fn is_malformed_dynamic(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}') && dynamic_name(segment).is_none()
}

/// Split a pattern on `/`, dropping empty segments.
pub fn compile_pattern(pattern: &str) -> Vec<RouteToken> {
    pattern
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(RouteToken::parse)
        .collect()
}

/// A compiled pattern: every token must accept the fragment token at the same index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatcher {
    tokens: Vec<RouteToken>,
}

impl TokenMatcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            tokens: compile_pattern(pattern),
        }
    }

    pub fn tokens(&self) -> &[RouteToken] {
        &self.tokens
    }

    /// Iterate dynamic token names paired with the fragment token at the same position.
    pub fn captures<'a>(&'a self, hash: &'a Hash) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.tokens
            .iter()
            .zip(hash.tokens())
            .filter(|(token, _)| token.is_dynamic)
            .map(|(token, value)| (token.name.as_str(), value.as_str()))
    }
}

impl Matcher for TokenMatcher {
    fn matches(&self, hash: &Hash) -> bool {
        if self.tokens.len() != hash.tokens().len() {
            return false;
        }

        // All tokens must pass (AND)
        self.tokens
            .iter()
            .zip(hash.tokens())
            .all(|(token, value)| token.accepts(value))
    }
}
