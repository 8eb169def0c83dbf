//! Route match types and error definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameters extracted from a fragment: search params overlaid by dynamic segments.
pub type Params = BTreeMap<String, String>;

/// Error a route callback may return. Logged and swallowed by the route.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Callback invoked when a route is activated.
pub type RouteCallback = Box<dyn FnMut(&RouteMatch) -> Result<(), CallbackError>>;

/// Errors raised while registering routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The pattern (or another registration argument) is unusable.
    #[error("route(): {0}")]
    Validation(String),

    /// The pattern is already registered on this router.
    #[error("route(): {0} has already been added")]
    Duplicate(String),
}

/// Result type for route registration.
pub type RouteResult<T> = Result<T, RouteError>;

/// The value handed to a route callback on activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    pub pattern: String,
    pub params: Params,
}

/// Snapshot of the router's active route.
///
/// Both fields are `None` until a route has matched at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentRoute {
    pub pattern: Option<String>,
    pub params: Option<Params>,
}

impl CurrentRoute {
    pub fn is_matched(&self) -> bool {
        self.pattern.is_some()
    }
}

impl From<RouteMatch> for CurrentRoute {
    fn from(m: RouteMatch) -> Self {
        Self {
            pattern: Some(m.pattern),
            params: Some(m.params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouteError::Duplicate("/home".into());
        assert_eq!(err.to_string(), "route(): /home has already been added");

        let err = RouteError::Validation("path should be non empty string.".into());
        assert!(err.to_string().contains("non empty"));
    }

    #[test]
    fn test_current_route_default_is_unmatched() {
        let current = CurrentRoute::default();
        assert!(!current.is_matched());
        assert_eq!(current.params, None);
    }

    #[test]
    fn test_current_route_serializes_nulls() {
        let json = serde_json::to_string(&CurrentRoute::default()).unwrap();
        assert_eq!(json, r#"{"pattern":null,"params":null}"#);
    }
}
