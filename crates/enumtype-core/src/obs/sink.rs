//! Metrics sink boundary.
//!
//! All instrumentation flows through `MetricsEvent` and `MetricsSink`.
//! This module is the only bridge between codec logic and the metrics state.
use crate::obs::metrics::{self, EventReport};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// CodecOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CodecOp {
    Encode,
    Decode,
    Marshal,
    Options,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    Register { type_path: &'static str },
    Encode { type_path: &'static str },
    Decode { type_path: &'static str },
    Marshal,
    Options { type_path: &'static str },
    InstanceBuilt { type_path: &'static str },
    Validate { accepted: bool },
    Failure { op: CodecOp },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local metrics state.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| match event {
            MetricsEvent::Register { type_path } => {
                m.ops.registrations = m.ops.registrations.saturating_add(1);
                metrics::type_entry(m, type_path);
            }
            MetricsEvent::Encode { type_path } => {
                m.ops.encode_calls = m.ops.encode_calls.saturating_add(1);
                let entry = metrics::type_entry(m, type_path);
                entry.encodes = entry.encodes.saturating_add(1);
            }
            MetricsEvent::Decode { type_path } => {
                m.ops.decode_calls = m.ops.decode_calls.saturating_add(1);
                let entry = metrics::type_entry(m, type_path);
                entry.decodes = entry.decodes.saturating_add(1);
            }
            MetricsEvent::Marshal => {
                m.ops.marshal_calls = m.ops.marshal_calls.saturating_add(1);
            }
            MetricsEvent::Options { type_path } => {
                m.ops.options_calls = m.ops.options_calls.saturating_add(1);
                let entry = metrics::type_entry(m, type_path);
                entry.options_calls = entry.options_calls.saturating_add(1);
            }
            MetricsEvent::InstanceBuilt { type_path } => {
                m.ops.instances_built = m.ops.instances_built.saturating_add(1);
                let entry = metrics::type_entry(m, type_path);
                entry.instances_built = entry.instances_built.saturating_add(1);
            }
            MetricsEvent::Validate { accepted } => {
                m.ops.validate_calls = m.ops.validate_calls.saturating_add(1);
                if !accepted {
                    m.ops.validate_rejections = m.ops.validate_rejections.saturating_add(1);
                }
            }
            MetricsEvent::Failure { op } => {
                let counter = match op {
                    CodecOp::Encode => &mut m.ops.encode_errors,
                    CodecOp::Decode => &mut m.ops.decode_errors,
                    CodecOp::Marshal => &mut m.ops.marshal_errors,
                    CodecOp::Options => &mut m.ops.options_errors,
                };
                *counter = counter.saturating_add(1);
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current thread's metrics.
#[must_use]
pub fn metrics_report() -> EventReport {
    metrics::report()
}

/// Reset all metrics state for the current thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
/// The previous sink is restored on every exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CaptureSink {
        events: RefCell<Vec<MetricsEvent>>,
    }

    impl MetricsSink for CaptureSink {
        fn record(&self, event: MetricsEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn global_sink_counts_per_type() {
        metrics_reset_all();

        record(MetricsEvent::Encode {
            type_path: "test::Status",
        });
        record(MetricsEvent::Encode {
            type_path: "test::Status",
        });
        record(MetricsEvent::Failure {
            op: CodecOp::Decode,
        });

        let report = metrics_report();
        assert_eq!(report.ops.encode_calls, 2);
        assert_eq!(report.ops.decode_errors, 1);
        assert_eq!(report.for_type("test::Status").encodes, 2);
    }

    #[test]
    fn override_captures_and_restores() {
        metrics_reset_all();
        let capture = Rc::new(CaptureSink::default());

        with_metrics_sink(capture.clone(), || {
            record(MetricsEvent::Validate { accepted: false });
        });
        record(MetricsEvent::Validate { accepted: true });

        assert_eq!(
            capture.events.borrow().as_slice(),
            &[MetricsEvent::Validate { accepted: false }]
        );
        let report = metrics_report();
        assert_eq!(report.ops.validate_calls, 1);
        assert_eq!(report.ops.validate_rejections, 0);
    }
}
