//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (resolution and callback counters)
//!
//! Consumers:
//!     → stderr via tracing-subscriber
//!     → any metrics recorder installed by the host
//! ```
//!
//! # Design Decisions
//! - Structured logging with fields (pattern, hash) for machine parsing
//! - Metrics are cheap and no-ops without a recorder

pub mod logging;
pub mod metrics;
