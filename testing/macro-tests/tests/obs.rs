use recast::{
    input,
    obs::{MetricsEvent, MetricsSink, Outcome, metrics_report, metrics_reset_all, with_metrics_sink},
    traits::Record,
};
use recast_testing_macro_tests::{person::Person, point::Point};
use std::cell::RefCell;

#[derive(Default)]
struct Capture(RefCell<Vec<MetricsEvent>>);

impl MetricsSink for Capture {
    fn record(&self, event: MetricsEvent) {
        self.0.borrow_mut().push(event);
    }
}

#[test]
fn outcomes_are_counted_per_record() {
    metrics_reset_all();

    let p = Point::new(input! { x: 1, y: 2 }).expect("built");
    let _ = Point::new(input! { x: -1, y: 2 });
    let _ = Point::new(input! { x: 1 });
    let _ = p.put(input! { z: 3 });

    let report = metrics_report();
    let counters = report.record(Point::MODEL.path).expect("point counters");

    assert_eq!(counters.new_calls, 3);
    assert_eq!(counters.put_calls, 1);
    assert_eq!(counters.built, 2);
    assert_eq!(counters.rejected, 1);
    assert_eq!(counters.failed, 1);
    assert_eq!(counters.missing_required, 1);
    assert_eq!(report.ops.new_calls, 3);
}

#[test]
fn lenient_merges_report_coercions_and_ignored_keys() {
    let sink = Capture::default();

    with_metrics_sink(&sink, || {
        let _ = Person::new(input! {
            "firstName" => "Ada",
            "age" => "36",
            "nicknames" => Vec::<String>::new(),
            "unknown" => 1,
        });
    });

    let events = sink.0.borrow();
    let path = Person::MODEL.path;

    assert!(events.contains(&MetricsEvent::UnknownKeyIgnored { record_path: path }));
    assert!(events.contains(&MetricsEvent::Coerced {
        record_path: path,
        field: "age",
    }));
    assert!(matches!(
        events.last(),
        Some(MetricsEvent::ConstructFinish {
            outcome: Outcome::Built,
            ..
        })
    ));
}

#[test]
fn report_serializes_to_json() {
    metrics_reset_all();
    let _ = Point::new(input! { x: 1, y: 1 });

    let json = serde_json::to_value(metrics_report()).expect("report json");

    assert_eq!(json["ops"]["built"], 1);
    assert_eq!(json["records"][0]["counters"]["new_calls"], 1);
}
