//! A single registered route.
//!
//! # Responsibilities
//! - Compile the registration pattern once
//! - Test fragments against the compiled tokens
//! - Merge search and dynamic params, then invoke the callback
//!
//! # Design Decisions
//! - Route params take priority over search params of the same key
//! - Callback failures (errors and panics) are logged and swallowed so a single
//!   faulty handler cannot break navigation

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::observability::metrics;
use crate::routing::hash::Hash;
use crate::routing::matcher::{Matcher, RouteToken, TokenMatcher};
use crate::routing::types::{CallbackError, Params, RouteCallback, RouteError, RouteMatch, RouteResult};

/// A compiled pattern bound to its activation callback.
pub struct Route {
    pattern: String,
    matcher: TokenMatcher,
    params: Params,
    callback: RouteCallback,
}

impl Route {
    /// Compile `pattern` and bind `callback`.
    ///
    /// Fails when the pattern is empty.
    pub fn new<F>(pattern: impl Into<String>, callback: F) -> RouteResult<Self>
    where
        F: FnMut(&RouteMatch) -> Result<(), CallbackError> + 'static,
    {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(RouteError::Validation(
                "path should be non empty string.".to_string(),
            ));
        }

        Ok(Self {
            matcher: TokenMatcher::new(&pattern),
            pattern,
            params: Params::new(),
            callback: Box::new(callback),
        })
    }

    /// The registration string, as given.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn tokens(&self) -> &[RouteToken] {
        self.matcher.tokens()
    }

    /// Params computed by the most recent activation.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Build the match snapshot handed to callbacks.
    pub fn to_match(&self) -> RouteMatch {
        RouteMatch {
            pattern: self.pattern.clone(),
            params: self.params.clone(),
        }
    }

    /// Populate params from `hash` and run the callback.
    ///
    /// Never propagates a callback failure.
    pub fn start(&mut self, hash: &Hash) {
        self.params = self.parse_params(hash);
        let route_match = self.to_match();

        let callback = &mut self.callback;
        match panic::catch_unwind(AssertUnwindSafe(|| callback(&route_match))) {
            Ok(Ok(())) => {
                tracing::debug!(pattern = %self.pattern, hash = %hash.value(), "Route started");
            }
            Ok(Err(e)) => {
                tracing::error!(
                    pattern = %self.pattern,
                    hash = %hash.value(),
                    error = %e,
                    "Couldn't start route"
                );
                metrics::record_callback_failure(&self.pattern);
            }
            Err(payload) => {
                tracing::error!(
                    pattern = %self.pattern,
                    hash = %hash.value(),
                    panic = %panic_message(payload.as_ref()),
                    "Route callback panicked"
                );
                metrics::record_callback_failure(&self.pattern);
            }
        }
    }

    fn parse_params(&self, hash: &Hash) -> Params {
        // Later duplicates overwrite earlier ones
        let mut params: Params = hash
            .search()
            .iter()
            .map(|p| (p.key.clone(), p.value.clone()))
            .collect();

        for (name, value) in self.matcher.captures(hash) {
            params.insert(name.to_string(), value.to_string());
        }
        params
    }
}

impl Matcher for Route {
    fn matches(&self, hash: &Hash) -> bool {
        self.matcher.matches(hash)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("tokens", &self.matcher.tokens())
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn noop(_: &RouteMatch) -> Result<(), CallbackError> {
        Ok(())
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let err = Route::new("", noop).unwrap_err();
        assert!(matches!(err, RouteError::Validation(_)));
    }

    #[test]
    fn test_tokens_compiled_at_construction() {
        let route = Route::new("/books/{id}", noop).unwrap();
        assert_eq!(route.pattern(), "/books/{id}");
        assert_eq!(route.tokens().len(), 2);
        assert!(route.params().is_empty());
    }

    #[test]
    fn test_start_passes_match_to_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut route = Route::new("/BOOKS/{Id}", move |m: &RouteMatch| {
            sink.borrow_mut().push(m.clone());
            Ok(())
        })
        .unwrap();

        let hash = Hash::parse("/books/42");
        assert!(route.matches(&hash));
        route.start(&hash);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].pattern, "/BOOKS/{Id}");
        assert_eq!(seen[0].params.get("Id").map(String::as_str), Some("42"));
        assert!(seen[0].params.get("id").is_none());
    }

    #[test]
    fn test_route_params_override_search() {
        let mut route = Route::new("/books/{id}", noop).unwrap();
        route.start(&Hash::parse("/books/123?id=0&page=2"));

        assert_eq!(route.params()["id"], "123");
        assert_eq!(route.params()["page"], "2");
    }

    #[test]
    fn test_last_duplicate_search_wins() {
        let mut route = Route::new("/books", noop).unwrap();
        route.start(&Hash::parse("/books?a=1&a=2"));
        assert_eq!(route.params()["a"], "2");
    }

    #[test]
    fn test_params_replaced_each_start() {
        let mut route = Route::new("/books", noop).unwrap();
        route.start(&Hash::parse("/books?a=1"));
        route.start(&Hash::parse("/books?b=1"));
        assert!(!route.params().contains_key("a"));
        assert_eq!(route.params()["b"], "1");
    }

    #[test]
    fn test_callback_error_swallowed() {
        let mut route = Route::new("/books", |_: &RouteMatch| -> Result<(), CallbackError> {
            Err("handler failed".into())
        })
        .unwrap();

        route.start(&Hash::parse("/books?x=1"));
        assert_eq!(route.params()["x"], "1");
    }

    #[test]
    fn test_callback_panic_swallowed() {
        let mut route = Route::new("/books", |_: &RouteMatch| -> Result<(), CallbackError> {
            panic!("boom")
        })
        .unwrap();

        route.start(&Hash::parse("/books"));
        assert_eq!(route.pattern(), "/books");
    }
}
