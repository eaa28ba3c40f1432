use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for construction calls.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub records: BTreeMap<String, RecordCounters>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Entrypoints
    pub new_calls: u64,
    pub put_calls: u64,

    // Outcomes
    pub built: u64,
    pub failed: u64,
    pub rejected: u64,

    // Merge detail
    pub missing_required: u64,
    pub unknown_keys_ignored: u64,
    pub coercions: u64,
}

///
/// RecordCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RecordCounters {
    pub new_calls: u64,
    pub put_calls: u64,
    pub built: u64,
    pub failed: u64,
    pub rejected: u64,
    pub missing_required: u64,
    pub unknown_keys_ignored: u64,
    pub coercions: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

/// Increment a global counter and the matching per-record counter.
pub(crate) fn bump(
    record_path: &str,
    global: impl FnOnce(&mut EventOps) -> &mut u64,
    local: impl FnOnce(&mut RecordCounters) -> &mut u64,
) {
    with_state_mut(|m| {
        let total = global(&mut m.ops);
        *total = total.saturating_add(1);

        let entry = m.records.entry(record_path.to_string()).or_default();
        let count = local(entry);
        *count = count.saturating_add(1);
    });
}

///
/// EventReport
/// Point-in-time copy of the counters.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    /// Per-record counters, sorted by record path.
    pub records: Vec<RecordSummary>,
}

///
/// RecordSummary
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RecordSummary {
    pub path: String,
    pub counters: RecordCounters,
}

impl EventReport {
    #[must_use]
    pub fn record(&self, path: &str) -> Option<&RecordCounters> {
        self.records
            .iter()
            .find(|summary| summary.path == path)
            .map(|summary| &summary.counters)
    }
}

/// Snapshot the current thread's counters.
#[must_use]
pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        ops: m.ops.clone(),
        records: m
            .records
            .iter()
            .map(|(path, counters)| RecordSummary {
                path: path.clone(),
                counters: counters.clone(),
            })
            .collect(),
    })
}
