use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for codec operations.
///

#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
    pub(crate) types: BTreeMap<String, TypeCounters>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Registry
    pub registrations: u64,

    // Codec entrypoints
    pub encode_calls: u64,
    pub decode_calls: u64,
    pub marshal_calls: u64,
    pub options_calls: u64,

    // Validation rule
    pub validate_calls: u64,
    pub validate_rejections: u64,

    // Memoized default instances
    pub instances_built: u64,

    // Failures by entrypoint
    pub encode_errors: u64,
    pub decode_errors: u64,
    pub marshal_errors: u64,
    pub options_errors: u64,
}

///
/// TypeCounters
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TypeCounters {
    pub encodes: u64,
    pub decodes: u64,
    pub options_calls: u64,
    pub instances_built: u64,
}

///
/// EventReport
/// Point-in-time snapshot of the counters.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    pub types: BTreeMap<String, TypeCounters>,
}

impl EventReport {
    /// Counters for one enum type path; zeroed if it was never touched.
    #[must_use]
    pub fn for_type(&self, path: &str) -> TypeCounters {
        self.types.get(path).cloned().unwrap_or_default()
    }
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

/// Snapshot the current state.
pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        ops: m.ops.clone(),
        types: m.types.clone(),
    })
}

/// Per-type counters, created on first touch.
pub(crate) fn type_entry<'a>(state: &'a mut EventState, path: &str) -> &'a mut TypeCounters {
    state.types.entry(path.to_string()).or_default()
}
