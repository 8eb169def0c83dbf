//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect empty and duplicate patterns
//! - Detect brace segments that will silently compile as literals
//! - Check the default hash resolves to a configured route
//! - Check the log level is one the filter understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::schema::RouterConfig;
use crate::routing::hash::Hash;
use crate::routing::matcher::{is_malformed_dynamic, Matcher, TokenMatcher};

/// A single semantic problem in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index}: pattern must not be empty")]
    EmptyPattern { index: usize },

    #[error("route #{index}: pattern {pattern} is already defined")]
    DuplicatePattern { index: usize, pattern: String },

    #[error("route #{index}: segment {segment} in {pattern} is not a valid dynamic token (letters only)")]
    InvalidDynamicSegment {
        index: usize,
        pattern: String,
        segment: String,
    },

    #[error("default hash {0} does not match any route")]
    UnreachableDefault(String),

    #[error("log level {0} is not one of off, error, warn, info, debug, trace")]
    InvalidLogLevel(String),
}

/// Validate a route table, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.pattern.is_empty() {
            errors.push(ValidationError::EmptyPattern { index });
            continue;
        }

        if !seen.insert(route.pattern.as_str()) {
            errors.push(ValidationError::DuplicatePattern {
                index,
                pattern: route.pattern.clone(),
            });
        }

        for segment in route.pattern.split('/').filter(|s| is_malformed_dynamic(s)) {
            errors.push(ValidationError::InvalidDynamicSegment {
                index,
                pattern: route.pattern.clone(),
                segment: segment.to_string(),
            });
        }
    }

    if let Some(default_hash) = &config.default_hash {
        let hash = Hash::parse(default_hash);
        let reachable = config
            .routes
            .iter()
            .filter(|r| !r.pattern.is_empty())
            .any(|r| TokenMatcher::new(&r.pattern).matches(&hash));
        if !reachable {
            errors.push(ValidationError::UnreachableDefault(default_hash.clone()));
        }
    }

    let log_level = &config.observability.log_level;
    if LevelFilter::from_str(log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
