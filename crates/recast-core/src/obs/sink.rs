//! Metrics sink boundary.
//!
//! Construction logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics::{self, EventReport};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// ConstructKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConstructKind {
    New,
    Put,
}

///
/// Outcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Merge and validation both succeeded.
    Built,
    /// Merge or materialization failed.
    Failed,
    /// The validation hook returned an error.
    Rejected,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    ConstructStart {
        kind: ConstructKind,
        record_path: &'static str,
    },
    ConstructFinish {
        kind: ConstructKind,
        record_path: &'static str,
        outcome: Outcome,
    },
    MissingRequired {
        record_path: &'static str,
        field: &'static str,
    },
    UnknownKeyIgnored {
        record_path: &'static str,
    },
    Coerced {
        record_path: &'static str,
        field: &'static str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into the counter state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::ConstructStart { kind, record_path } => match kind {
                ConstructKind::New => {
                    metrics::bump(record_path, |o| &mut o.new_calls, |r| &mut r.new_calls);
                }
                ConstructKind::Put => {
                    metrics::bump(record_path, |o| &mut o.put_calls, |r| &mut r.put_calls);
                }
            },
            MetricsEvent::ConstructFinish {
                record_path,
                outcome,
                ..
            } => match outcome {
                Outcome::Built => {
                    metrics::bump(record_path, |o| &mut o.built, |r| &mut r.built);
                }
                Outcome::Failed => {
                    metrics::bump(record_path, |o| &mut o.failed, |r| &mut r.failed);
                }
                Outcome::Rejected => {
                    metrics::bump(record_path, |o| &mut o.rejected, |r| &mut r.rejected);
                }
            },
            MetricsEvent::MissingRequired { record_path, .. } => metrics::bump(
                record_path,
                |o| &mut o.missing_required,
                |r| &mut r.missing_required,
            ),
            MetricsEvent::UnknownKeyIgnored { record_path } => metrics::bump(
                record_path,
                |o| &mut o.unknown_keys_ignored,
                |r| &mut r.unknown_keys_ignored,
            ),
            MetricsEvent::Coerced { record_path, .. } => {
                metrics::bump(record_path, |o| &mut o.coercions, |r| &mut r.coercions);
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn MetricsSink` in `with_metrics_sink`.
        // - `with_metrics_sink` restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        unsafe { (*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current thread's construction counters.
#[must_use]
pub fn metrics_report() -> EventReport {
    metrics::report()
}

/// Reset the current thread's construction counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
/// Events recorded inside `f` go to `sink` instead of the global counters.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}

///
/// Span
/// RAII guard that emits start/finish events for one construction call.
/// A span dropped without `finish` (e.g. a panicking hook) reports `Failed`.
///

pub(crate) struct Span {
    kind: ConstructKind,
    record_path: &'static str,
    finished: bool,
}

impl Span {
    #[must_use]
    pub(crate) fn new(kind: ConstructKind, record_path: &'static str) -> Self {
        record(MetricsEvent::ConstructStart { kind, record_path });

        Self {
            kind,
            record_path,
            finished: false,
        }
    }

    pub(crate) fn finish(mut self, outcome: Outcome) {
        self.finish_inner(outcome);
    }

    fn finish_inner(&mut self, outcome: Outcome) {
        if !self.finished {
            record(MetricsEvent::ConstructFinish {
                kind: self.kind,
                record_path: self.record_path,
                outcome,
            });
            self.finished = true;
        }
    }
}

impl Drop for Span {
    fn drop(&mut self) {
        self.finish_inner(Outcome::Failed);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

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
    fn override_captures_events_and_restores_global() {
        metrics_reset_all();
        let sink = CaptureSink::default();

        with_metrics_sink(&sink, || {
            Span::new(ConstructKind::New, "obs::Thing").finish(Outcome::Built);
        });

        assert_eq!(
            *sink.events.borrow(),
            vec![
                MetricsEvent::ConstructStart {
                    kind: ConstructKind::New,
                    record_path: "obs::Thing",
                },
                MetricsEvent::ConstructFinish {
                    kind: ConstructKind::New,
                    record_path: "obs::Thing",
                    outcome: Outcome::Built,
                },
            ]
        );
        assert_eq!(metrics_report().ops.new_calls, 0);

        Span::new(ConstructKind::Put, "obs::Thing").finish(Outcome::Rejected);
        let report = metrics_report();
        assert_eq!(report.ops.put_calls, 1);
        assert_eq!(report.ops.rejected, 1);
    }

    #[test]
    fn dropped_span_counts_as_failed() {
        metrics_reset_all();

        drop(Span::new(ConstructKind::New, "obs::Dropped"));

        let report = metrics_report();
        let counters = report.record("obs::Dropped").expect("record counters");
        assert_eq!(counters.new_calls, 1);
        assert_eq!(counters.failed, 1);
        assert_eq!(counters.built, 0);
    }
}
