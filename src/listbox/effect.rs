//! Effects requested by listbox transitions.

use super::types::Callback;
use crate::dom::ElementId;
use std::fmt::{self, Debug};

/// What a deferred focus request points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    /// A handle captured from the triggering event's refs.
    Element(ElementId),
    /// Whatever option `navigation_value` names when the frame runs.
    NavigationOption,
}

/// Side effect for the host to perform after a transition.
#[derive(Clone)]
pub enum ListboxEffect<V> {
    /// Focus an element on the next frame.
    Focus(FocusTarget),
    /// Call a selection callback synchronously, before observers are told.
    Notify { callback: Callback<V>, value: V },
}

impl<V: Debug> Debug for ListboxEffect<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Focus(target) => f.debug_tuple("Focus").field(target).finish(),
            Self::Notify { value, .. } => f.debug_struct("Notify").field("value", value).finish(),
        }
    }
}
