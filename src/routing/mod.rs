//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (initial load, hash change)
//!     → router.rs (Router::start)
//!     → hash.rs (tokens + search params)
//!     → matcher.rs (evaluate tokens, first registered match wins)
//!     → route.rs (merge params, invoke callback)
//!
//! No match:
//!     → default hash configured? replace history entry, resolve again
//!     → otherwise log and keep the previous match
//! ```
//!
//! # Design Decisions
//! - Patterns compiled once at registration
//! - No regex in hot path (token comparison only)
//! - Deterministic: same fragment always matches same route
//! - First match wins (ordered by registration)

pub mod hash;
pub mod matcher;
pub mod route;
pub mod router;
pub mod types;

pub use hash::{Hash, SearchParam};
pub use matcher::{Matcher, RouteToken};
pub use route::Route;
pub use router::{Resolution, Router};
pub use types::{CallbackError, CurrentRoute, Params, RouteError, RouteMatch};
