//! Span definitions per operation: graph analysis, solve, evaluate, sweep, storage.

/// Create a graph-analysis span.
#[macro_export]
macro_rules! graph_span {
    ($situations:expr, $transitions:expr) => {
        tracing::debug_span!(
            $crate::tracing_setup::spans::names::GRAPH,
            situations = $situations,
            transitions = $transitions
        )
    };
}

/// Create a value-iteration span.
#[macro_export]
macro_rules! solve_span {
    ($steps:expr) => {
        tracing::debug_span!($crate::tracing_setup::spans::names::SOLVE, steps = $steps)
    };
}

/// Create a risk-evaluation span.
#[macro_export]
macro_rules! evaluate_span {
    ($rows:expr) => {
        tracing::debug_span!($crate::tracing_setup::spans::names::EVALUATE, rows = $rows)
    };
}

/// Create a sweep span.
#[macro_export]
macro_rules! sweep_span {
    ($mode:expr, $points:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::spans::names::SWEEP,
            mode = %$mode,
            points = $points
        )
    };
}

/// Create a storage span.
#[macro_export]
macro_rules! storage_span {
    ($operation:expr, $name:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::spans::names::STORAGE,
            operation = $operation,
            name = %$name
        )
    };
}

/// Span names shared by the macros above and by subscribers filtering on them.
pub mod names {
    pub const GRAPH: &str = "pathrisk.graph";
    pub const SOLVE: &str = "pathrisk.solve";
    pub const EVALUATE: &str = "pathrisk.evaluate";
    pub const SWEEP: &str = "pathrisk.sweep";
    pub const STORAGE: &str = "pathrisk.storage";
}

#[cfg(test)]
mod tests {
    use super::names;

    #[test]
    fn test_macros_use_named_spans() {
        tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            let sweep = crate::sweep_span!("risk_vs_attack", 10usize);
            let storage = crate::storage_span!("get", "bank");
            assert_eq!(sweep.metadata().map(|m| m.name()), Some(names::SWEEP));
            assert_eq!(storage.metadata().map(|m| m.name()), Some(names::STORAGE));
        });
    }
}
