//! Tracing utilities for generation and validation observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with a generated SQL statement.
///
/// ```ignore
/// ddl_trace_sql!("index", table, &sql);
/// ```
#[macro_export]
macro_rules! ddl_trace_sql {
    ($kind:literal, $target:expr, $sql:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = $kind, object = %$target, sql = %$sql, "ddlkit.sql");
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (&$target, &$sql);
        }
    };
}

/// Emit a debug-level tracing event for a failed validation.
///
/// ```ignore
/// ddl_trace_invalid!(self.name(), err);
/// ```
#[macro_export]
macro_rules! ddl_trace_invalid {
    ($target:expr, $err:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(object = %$target, error = %$err, "ddlkit.validate");
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (&$target, &$err);
        }
    };
}
