//! Logging facilities for Roundel.
//!
//! Roundel uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("roundel=debug,roundel_core=info")
//!         .init();
//! }
//! ```
//!
//! The constants in [`targets`] name every subsystem so they can be used in
//! filter directives.

/// Target names for log filtering.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "roundel_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "roundel_core::signal";
    /// Section model and reuse catalog target.
    pub const MODEL: &str = "roundel::model";
    /// List renderer and section visibility target.
    pub const TABLE: &str = "roundel::table";
    /// Scroll observer, indicator and refresh control target.
    pub const REFRESH: &str = "roundel::refresh";
    /// Performance spans.
    pub const PERF: &str = "roundel::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations such as a full
/// model reload.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "roundel::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace event under the core target.
#[macro_export]
macro_rules! roundel_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "roundel_core", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        // Just ensure it compiles and doesn't panic without a subscriber
        let _span = PerfSpan::new("test_operation");
        roundel_trace!(value = 1, "inside perf span");
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::MODEL, targets::TABLE, targets::REFRESH, targets::PERF] {
            assert!(target.starts_with("roundel::"));
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
