//! `tracing` emission for rendered SQL.
//!
//! Enable via the crate feature `tracing` (on by default). Without it every
//! function here is a no-op.

use crate::action::Action;

/// Cut `sql` to at most `max` bytes on a char boundary, appending `...`.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql(sql: &str, max: Option<usize>) -> String {
    match max {
        Some(max) if sql.len() > max => {
            let mut end = max;
            while end > 0 && !sql.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &sql[..end])
        }
        _ => sql.to_string(),
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn rendered(action: Action, sql: &str, terminated: bool, max_len: Option<usize>) {
    let sql = truncate_sql(sql, max_len);
    tracing::debug!(
        target: "sqlgen.sql",
        action = %action,
        terminated,
        sql = %sql,
        "rendered statement"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn rendered(_action: Action, _sql: &str, _terminated: bool, _max_len: Option<usize>) {}

#[cfg(feature = "tracing")]
pub(crate) fn pending_field_missing(operation: &'static str) {
    tracing::warn!(
        target: "sqlgen.builder",
        operation,
        "no pending field staged; rendering an empty field"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn pending_field_missing(_operation: &'static str) {}

#[cfg(feature = "tracing")]
pub(crate) fn reset(clear_snapshots: bool) {
    tracing::trace!(target: "sqlgen.builder", clear_snapshots, "statement state cleared");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn reset(_clear_snapshots: bool) {}
