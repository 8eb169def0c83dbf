//! Hash-fragment router for single-page applications.

pub mod config;
pub mod host;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use host::{Location, MemoryLocation, Navigator};
pub use routing::{CurrentRoute, Hash, Resolution, Route, RouteError, RouteMatch, Router};
