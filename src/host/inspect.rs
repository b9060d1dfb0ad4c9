//! Per-service inspection hooks.
//!
//! The service reports every event it sees to its [`Inspector`]. The default
//! discards everything; [`TracingInspector`] forwards to `tracing`.

use crate::core::State;
use crate::dom::ElementId;
use crate::listbox::{EventKind, FocusTarget, ListboxSnapshot, ListboxState, Value};
use uuid::Uuid;

/// Why an event produced no transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// The state declares nothing for the event.
    Unhandled,
    /// Every candidate's guard rejected the event.
    Blocked { guards: Vec<&'static str> },
}

/// Observer of a single service's activity.
pub trait Inspector<V: Value> {
    fn started(&self, _service: Uuid, _state: ListboxState) {}

    fn event(&self, _service: Uuid, _state: ListboxState, _kind: EventKind) {}

    fn transition(
        &self,
        _service: Uuid,
        _kind: EventKind,
        _from: ListboxState,
        _snapshot: &ListboxSnapshot<V>,
    ) {
    }

    fn dropped(&self, _service: Uuid, _state: ListboxState, _kind: EventKind, _reason: &DropReason) {
    }

    /// A queued focus request had no connected element when its frame ran.
    fn focus_skipped(&self, _service: Uuid, _target: FocusTarget, _element: Option<ElementId>) {}

    fn stopped(&self, _service: Uuid) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopInspector;

impl<V: Value> Inspector<V> for NoopInspector {}

/// Logs service activity at `debug`, and full snapshots at `trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingInspector;

impl<V: Value> Inspector<V> for TracingInspector {
    fn started(&self, service: Uuid, state: ListboxState) {
        tracing::debug!(listbox = %service, state = state.name(), "service started");
    }

    fn event(&self, service: Uuid, state: ListboxState, kind: EventKind) {
        tracing::debug!(listbox = %service, state = state.name(), event = %kind, "event received");
    }

    fn transition(
        &self,
        service: Uuid,
        kind: EventKind,
        from: ListboxState,
        snapshot: &ListboxSnapshot<V>,
    ) {
        tracing::debug!(
            listbox = %service,
            event = %kind,
            from = from.name(),
            to = snapshot.value.name(),
            "transition"
        );
        tracing::trace!(listbox = %service, context = ?snapshot.context, "context");
    }

    fn dropped(&self, service: Uuid, state: ListboxState, kind: EventKind, reason: &DropReason) {
        tracing::debug!(
            listbox = %service,
            state = state.name(),
            event = %kind,
            ?reason,
            "event dropped"
        );
    }

    fn focus_skipped(&self, service: Uuid, target: FocusTarget, element: Option<ElementId>) {
        tracing::debug!(listbox = %service, ?target, ?element, "focus target unavailable");
    }

    fn stopped(&self, service: Uuid) {
        tracing::debug!(listbox = %service, "service stopped");
    }
}
