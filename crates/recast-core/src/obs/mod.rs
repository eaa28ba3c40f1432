//! Observability: construction telemetry and sink abstractions.
//!
//! Counters are thread-local and never influence construction results.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport, RecordCounters, RecordSummary};
pub use sink::{
    ConstructKind, MetricsEvent, MetricsSink, Outcome, metrics_report, metrics_reset_all,
    with_metrics_sink,
};
