//! Metrics collection.
//!
//! # Responsibilities
//! - Count how navigations are resolved (direct, default, miss)
//! - Count route callback failures
//!
//! # Metrics
//! - `hash_router_resolutions_total` (counter): navigations by outcome
//! - `hash_router_callback_failures_total` (counter): failed callbacks by pattern
//!
//! # Design Decisions
//! - Without an installed recorder every call is a no-op
//! - Outcome labels are static strings to keep cardinality bounded

use metrics::counter;

/// Record the outcome of one `Router::start` call.
pub fn record_resolution(outcome: &'static str) {
    counter!("hash_router_resolutions_total", "outcome" => outcome).increment(1);
}

/// Record a route callback that returned an error or panicked.
pub fn record_callback_failure(pattern: &str) {
    counter!("hash_router_callback_failures_total", "pattern" => pattern.to_string()).increment(1);
}

#[cfg(test)]
mod tests {
    use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};

    use crate::routing::{CallbackError, RouteMatch, Router};

    fn noop(_: &RouteMatch) -> Result<(), CallbackError> {
        Ok(())
    }

    /// Sum of the counter `name` whose labels include `label`.
    fn counter(snapshotter: &Snapshotter, name: &str, label: (&str, &str)) -> u64 {
        snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .filter(|(key, ..)| {
                key.key().name() == name
                    && key
                        .key()
                        .labels()
                        .any(|l| l.key() == label.0 && l.value() == label.1)
            })
            .map(|(.., value)| match value {
                DebugValue::Counter(n) => n,
                _ => 0,
            })
            .sum()
    }

    #[test]
    fn test_router_records_outcomes_and_failures() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let mut router = Router::new();
            router.route("/home", noop).unwrap();
            router
                .route("/boom", |_: &RouteMatch| -> Result<(), CallbackError> {
                    Err("bad handler".into())
                })
                .unwrap();

            router.start("/home");
            router.start("/boom");
            router.start("/nowhere");
            router.set_default_hash(Some("home".into()));
            router.start("/elsewhere");
        });

        let resolutions = "hash_router_resolutions_total";
        assert_eq!(counter(&snapshotter, resolutions, ("outcome", "direct")), 2);
        assert_eq!(counter(&snapshotter, resolutions, ("outcome", "default")), 1);
        assert_eq!(counter(&snapshotter, resolutions, ("outcome", "miss")), 1);
        assert_eq!(
            counter(&snapshotter, "hash_router_callback_failures_total", ("pattern", "/boom")),
            1
        );
    }
}
