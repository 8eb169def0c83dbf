//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store registered routes in insertion order, keyed by pattern
//! - Resolve the current fragment to the first matching route
//! - Fall back to the default hash, rewriting history instead of pushing
//! - Expose the currently active match
//!
//! # Design Decisions
//! - O(1) duplicate detection via HashMap, O(n) ordered scan for matching
//! - First registered match wins; no specificity ranking
//! - A miss is logged, never an error; the previous match is retained

use std::collections::HashMap;
use std::fmt;

use crate::config::schema::{RouteConfig, RouterConfig};
use crate::host::location::{Location, MemoryLocation};
use crate::observability::metrics;
use crate::routing::hash::Hash;
use crate::routing::matcher::Matcher;
use crate::routing::route::Route;
use crate::routing::types::{CallbackError, CurrentRoute, RouteError, RouteMatch, RouteResult};

/// How a call to [`Router::start`] was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A registered route matched the requested fragment.
    Direct(String),
    /// Nothing matched; the default hash was activated instead.
    Default(String),
    /// Neither the fragment nor the default hash matched.
    NoMatch,
}

impl Resolution {
    /// Pattern of the activated route, if any.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Resolution::Direct(p) | Resolution::Default(p) => Some(p),
            Resolution::NoMatch => None,
        }
    }
}

/// Hash-based router.
pub struct Router<L: Location = MemoryLocation> {
    default_hash: Option<String>,
    routes: Vec<Route>,
    index: HashMap<String, usize>,
    hash: Hash,
    current: Option<usize>,
    location: L,
}

impl Router<MemoryLocation> {
    /// Create a router backed by an in-memory location.
    pub fn new() -> Self {
        Self::with_location(MemoryLocation::default())
    }

    /// Build a router from a route table.
    ///
    /// `make_callback` is called once per configured route to produce its handler.
    pub fn from_config<F, C>(config: &RouterConfig, make_callback: F) -> RouteResult<Self>
    where
        F: FnMut(&RouteConfig) -> C,
        C: FnMut(&RouteMatch) -> Result<(), CallbackError> + 'static,
    {
        let mut router = Self::new();
        router.apply_config(config, make_callback)?;
        Ok(router)
    }
}

impl Default for Router<MemoryLocation> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Location> Router<L> {
    /// Create a router bound to a host location.
    pub fn with_location(location: L) -> Self {
        Self {
            default_hash: None,
            routes: Vec::new(),
            index: HashMap::new(),
            hash: Hash::new(),
            current: None,
            location,
        }
    }

    /// Register every configured route and adopt the configured default hash.
    ///
    /// All or nothing: on error the router is left untouched.
    pub fn apply_config<F, C>(&mut self, config: &RouterConfig, mut make_callback: F) -> RouteResult<()>
    where
        F: FnMut(&RouteConfig) -> C,
        C: FnMut(&RouteMatch) -> Result<(), CallbackError> + 'static,
    {
        let mut staged: Vec<Route> = Vec::with_capacity(config.routes.len());
        for route in &config.routes {
            let pattern = &route.pattern;
            if self.index.contains_key(pattern) || staged.iter().any(|r| r.pattern() == pattern) {
                return Err(RouteError::Duplicate(pattern.clone()));
            }
            staged.push(Route::new(pattern.clone(), make_callback(route))?);
        }

        for route in staged {
            self.insert(route);
        }
        if config.default_hash.is_some() {
            self.default_hash = config.default_hash.clone();
        }
        Ok(())
    }

    pub fn default_hash(&self) -> Option<&str> {
        self.default_hash.as_deref()
    }

    /// Set the fragment activated when nothing matches.
    pub fn set_default_hash(&mut self, default_hash: Option<String>) {
        self.default_hash = default_hash;
    }

    /// Register `path`. Fails if it is empty or already registered.
    pub fn route<F>(&mut self, path: impl Into<String>, on_start: F) -> RouteResult<()>
    where
        F: FnMut(&RouteMatch) -> Result<(), CallbackError> + 'static,
    {
        let path = path.into();
        if self.index.contains_key(&path) {
            return Err(RouteError::Duplicate(path));
        }

        self.insert(Route::new(path, on_start)?);
        Ok(())
    }

    fn insert(&mut self, route: Route) {
        tracing::debug!(pattern = %route.pattern(), priority = self.routes.len(), "Route registered");
        self.index.insert(route.pattern().to_string(), self.routes.len());
        self.routes.push(route);
    }

    /// Alias for [`Router::route`].
    pub fn register<F>(&mut self, path: impl Into<String>, on_start: F) -> RouteResult<()>
    where
        F: FnMut(&RouteMatch) -> Result<(), CallbackError> + 'static,
    {
        self.route(path, on_start)
    }

    /// Resolve `raw` and activate the matching route.
    pub fn start(&mut self, raw: &str) -> Resolution {
        self.hash.set_value(raw);

        if let Some(i) = self.find_route() {
            self.activate(i);
            metrics::record_resolution("direct");
            return Resolution::Direct(self.routes[i].pattern().to_string());
        }

        match self.default_hash.clone() {
            Some(default_hash) => self.start_default(raw, &default_hash),
            None => {
                tracing::warn!(hash = %raw, "No route matches");
                metrics::record_resolution("miss");
                Resolution::NoMatch
            }
        }
    }

    fn start_default(&mut self, raw: &str, default_hash: &str) -> Resolution {
        let url = format!("{}#{}", self.location.pathname(), default_hash);
        self.location.replace_state(&url);
        self.hash.set_value(default_hash);

        match self.find_route() {
            Some(i) => {
                tracing::info!(hash = %raw, default = %default_hash, "Falling back to default route");
                self.activate(i);
                metrics::record_resolution("default");
                Resolution::Default(self.routes[i].pattern().to_string())
            }
            None => {
                tracing::warn!(hash = %raw, default = %default_hash, "No route handler");
                metrics::record_resolution("miss");
                Resolution::NoMatch
            }
        }
    }

    fn find_route(&self) -> Option<usize> {
        self.routes.iter().position(|route| route.matches(&self.hash))
    }

    fn activate(&mut self, i: usize) {
        self.current = Some(i);
        self.routes[i].start(&self.hash);
    }

    /// The most recently activated route, or an unmatched snapshot.
    pub fn current(&self) -> CurrentRoute {
        match self.current {
            Some(i) => self.routes[i].to_match().into(),
            None => CurrentRoute::default(),
        }
    }

    /// Registered patterns in priority order.
    pub fn paths(&self) -> Vec<String> {
        self.routes.iter().map(|r| r.pattern().to_string()).collect()
    }

    pub fn any_routes(&self) -> bool {
        !self.routes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a registered route by pattern.
    pub fn get(&self, pattern: &str) -> Option<&Route> {
        self.index.get(pattern).map(|&i| &self.routes[i])
    }

    /// The last parsed fragment (the default hash after a fallback).
    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }
}

impl<L: Location + fmt::Debug> fmt::Debug for Router<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("default_hash", &self.default_hash)
            .field("routes", &self.routes)
            .field("hash", &self.hash)
            .field("current", &self.current)
            .field("location", &self.location)
            .finish()
    }
}
