//! Observability: in-process counters and the sink they flow through.
//!
//! Codec and registry code never touch `metrics` directly; every event goes
//! through `sink::record` so tests can install a scoped override.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport, TypeCounters};
pub use sink::{
    CodecOp, MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink,
};
