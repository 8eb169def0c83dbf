//! Host integration.
//!
//! # Data Flow
//! ```text
//! initial load / hashchange / go()
//!     → navigator.rs (read fragment from Location)
//!     → Router::start
//!     → default fallback → location.rs (replace_state, no new entry)
//! ```

pub mod location;
pub mod navigator;

pub use location::{Location, MemoryLocation};
pub use navigator::Navigator;
