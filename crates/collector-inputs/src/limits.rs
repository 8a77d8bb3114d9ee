//! Rate limits of application inputs

use collector_api::{InputSpec, LimitSpec};

/// Per-container record limit configured on an application input.
///
/// Returns `(0, false)` when no limit is configured at any level and
/// `(value, true)` otherwise, so an explicit zero stays distinguishable.
pub fn max_records_per_second(input: &InputSpec) -> (i64, bool) {
    let limit = input
        .application
        .as_ref()
        .and_then(|app| app.tuning.as_ref())
        .and_then(|tuning| tuning.rate_limit_per_container.as_ref());
    threshold(limit)
}

/// Threshold of an optional limit, in the same `(value, present)` shape.
pub fn threshold(limit: Option<&LimitSpec>) -> (i64, bool) {
    match limit {
        Some(limit) => (limit.max_records_per_second, true),
        None => (0, false),
    }
}

/// [`max_records_per_second`] as an `Option`.
pub fn rate_limit(input: &InputSpec) -> Option<i64> {
    match max_records_per_second(input) {
        (value, true) => Some(value),
        (_, false) => None,
    }
}
