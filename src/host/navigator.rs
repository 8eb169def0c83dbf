//! Binds the router to host navigation events.
//!
//! # Responsibilities
//! - Resolve the initial fragment on load
//! - Resolve the fragment again on every hash change
//! - Programmatic navigation (`go`, `back`)
//!
//! # Design Decisions
//! - Events are handled synchronously, strictly in delivery order
//! - Hash-change listening is only enabled when routes exist at load time

use crate::host::location::{Location, MemoryLocation};
use crate::routing::router::{Resolution, Router};
use crate::routing::types::CurrentRoute;

/// Drives a [`Router`] from a [`Location`].
#[derive(Debug)]
pub struct Navigator<L: Location = MemoryLocation> {
    router: Router<L>,
    listening: bool,
}

impl<L: Location> Navigator<L> {
    pub fn new(router: Router<L>) -> Self {
        Self {
            router,
            listening: false,
        }
    }

    /// Initial page load: start listening (if any routes exist) and resolve the
    /// location's current fragment.
    pub fn load(&mut self) -> Resolution {
        self.listening = self.router.any_routes();
        if !self.listening {
            tracing::debug!("No routes registered, hash changes will be ignored");
        }
        let hash = self.router.location().hash();
        self.router.start(&hash)
    }

    /// The location's fragment changed. Ignored until [`Navigator::load`] has
    /// enabled listening.
    pub fn hash_changed(&mut self) -> Option<Resolution> {
        if !self.listening {
            return None;
        }
        let hash = self.router.location().hash();
        Some(self.router.start(&hash))
    }

    /// Navigate to `fragment`, adding a history entry.
    ///
    /// Navigating to the current fragment adds no entry and fires no change.
    pub fn go(&mut self, fragment: &str) -> Option<Resolution> {
        let current = self.router.location().hash();
        if strip_hash(&current) == strip_hash(fragment) {
            tracing::debug!(hash = %fragment, "Fragment unchanged, ignoring navigation");
            return None;
        }
        self.router.location_mut().push_hash(fragment);
        self.hash_changed()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The router's active match.
    pub fn matched_route(&self) -> CurrentRoute {
        self.router.current()
    }

    pub fn router(&self) -> &Router<L> {
        &self.router
    }
}

fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

impl Navigator<MemoryLocation> {
    /// Step back in history and resolve the restored fragment.
    pub fn back(&mut self) -> Option<Resolution> {
        if !self.router.location_mut().back() {
            return None;
        }
        self.hash_changed()
    }
}
