//! Events accepted by the listbox machine.

use super::context::ContextPatch;
use super::types::{Callback, Direction, Refs, Selection};
use crate::core::Event;
use crate::dom::ElementId;
use std::fmt::{self, Debug};
use std::str::FromStr;
use thiserror::Error;

/// A typed interaction message from the rendering layer.
#[derive(Clone)]
pub enum ListboxEvent<V> {
    ButtonMouseDown,
    ButtonMouseUp,
    Blur {
        /// Element receiving focus, when the platform reports one.
        related_target: Option<ElementId>,
    },
    ClearNavSelection,
    ClearTypeahead,
    GetDerivedData(ContextPatch<V>),
    KeyDownEscape,
    KeyDownEnter(Selection<V>),
    KeyDownSpace(Selection<V>),
    KeyDownNavigate {
        direction: Direction,
        /// Explicit target; resolved from `direction` when absent.
        value: Option<V>,
    },
    KeyDownSearch {
        query: String,
    },
    KeyDownTab,
    KeyDownShiftTab,
    Navigate {
        value: V,
    },
    OptionMouseEnter {
        value: V,
    },
    ValueChange {
        value: V,
        callback: Option<Callback<V>>,
    },
    OptionStartClick {
        value: V,
        disabled: bool,
    },
    OptionFinishClick(Selection<V>),
    PopoverPointerDown,
    PopoverPointerUp,
    UpdateAfterTypeahead {
        query: String,
        callback: Option<Callback<V>>,
    },
}

impl<V> ListboxEvent<V> {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ButtonMouseDown => EventKind::ButtonMouseDown,
            Self::ButtonMouseUp => EventKind::ButtonMouseUp,
            Self::Blur { .. } => EventKind::Blur,
            Self::ClearNavSelection => EventKind::ClearNavSelection,
            Self::ClearTypeahead => EventKind::ClearTypeahead,
            Self::GetDerivedData(_) => EventKind::GetDerivedData,
            Self::KeyDownEscape => EventKind::KeyDownEscape,
            Self::KeyDownEnter(_) => EventKind::KeyDownEnter,
            Self::KeyDownSpace(_) => EventKind::KeyDownSpace,
            Self::KeyDownNavigate { .. } => EventKind::KeyDownNavigate,
            Self::KeyDownSearch { .. } => EventKind::KeyDownSearch,
            Self::KeyDownTab => EventKind::KeyDownTab,
            Self::KeyDownShiftTab => EventKind::KeyDownShiftTab,
            Self::Navigate { .. } => EventKind::Navigate,
            Self::OptionMouseEnter { .. } => EventKind::OptionMouseEnter,
            Self::ValueChange { .. } => EventKind::ValueChange,
            Self::OptionStartClick { .. } => EventKind::OptionStartClick,
            Self::OptionFinishClick(_) => EventKind::OptionFinishClick,
            Self::PopoverPointerDown => EventKind::PopoverPointerDown,
            Self::PopoverPointerUp => EventKind::PopoverPointerUp,
            Self::UpdateAfterTypeahead { .. } => EventKind::UpdateAfterTypeahead,
        }
    }

    /// Build the event for a bare kind, when it needs no payload.
    ///
    /// Commit keys default to committing the highlighted option.
    pub fn bare(kind: EventKind) -> Option<Self> {
        let event = match kind {
            EventKind::ButtonMouseDown => Self::ButtonMouseDown,
            EventKind::ButtonMouseUp => Self::ButtonMouseUp,
            EventKind::Blur => Self::Blur {
                related_target: None,
            },
            EventKind::ClearNavSelection => Self::ClearNavSelection,
            EventKind::ClearTypeahead => Self::ClearTypeahead,
            EventKind::KeyDownEscape => Self::KeyDownEscape,
            EventKind::KeyDownEnter => Self::KeyDownEnter(Selection::highlighted()),
            EventKind::KeyDownSpace => Self::KeyDownSpace(Selection::highlighted()),
            EventKind::KeyDownTab => Self::KeyDownTab,
            EventKind::KeyDownShiftTab => Self::KeyDownShiftTab,
            EventKind::PopoverPointerDown => Self::PopoverPointerDown,
            EventKind::PopoverPointerUp => Self::PopoverPointerUp,
            EventKind::GetDerivedData
            | EventKind::KeyDownNavigate
            | EventKind::KeyDownSearch
            | EventKind::Navigate
            | EventKind::OptionMouseEnter
            | EventKind::ValueChange
            | EventKind::OptionStartClick
            | EventKind::OptionFinishClick
            | EventKind::UpdateAfterTypeahead => return None,
        };
        Some(event)
    }

    /// Typed character(s) for search-as-you-type.
    pub fn search(query: impl Into<String>) -> Self {
        Self::KeyDownSearch {
            query: query.into(),
        }
    }

    pub fn navigate(direction: Direction) -> Self {
        Self::KeyDownNavigate {
            direction,
            value: None,
        }
    }

    pub fn update_after_typeahead(query: impl Into<String>) -> Self {
        Self::UpdateAfterTypeahead {
            query: query.into(),
            callback: None,
        }
    }
}

impl<V: Debug> Debug for ListboxEvent<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blur { related_target } => f
                .debug_struct("Blur")
                .field("related_target", related_target)
                .finish(),
            Self::GetDerivedData(patch) => f.debug_tuple("GetDerivedData").field(patch).finish(),
            Self::KeyDownEnter(selection)
            | Self::KeyDownSpace(selection)
            | Self::OptionFinishClick(selection) => {
                f.debug_tuple(self.kind().name()).field(selection).finish()
            }
            Self::KeyDownNavigate { direction, value } => f
                .debug_struct("KeyDownNavigate")
                .field("direction", direction)
                .field("value", value)
                .finish(),
            Self::KeyDownSearch { query } => {
                f.debug_struct("KeyDownSearch").field("query", query).finish()
            }
            Self::Navigate { value } | Self::OptionMouseEnter { value } => f
                .debug_struct(self.kind().name())
                .field("value", value)
                .finish(),
            Self::ValueChange { value, callback } => f
                .debug_struct("ValueChange")
                .field("value", value)
                .field("callback", &callback.is_some())
                .finish(),
            Self::OptionStartClick { value, disabled } => f
                .debug_struct("OptionStartClick")
                .field("value", value)
                .field("disabled", disabled)
                .finish(),
            Self::UpdateAfterTypeahead { query, callback } => f
                .debug_struct("UpdateAfterTypeahead")
                .field("query", query)
                .field("callback", &callback.is_some())
                .finish(),
            _ => f.write_str(self.kind().name()),
        }
    }
}

/// Payload-free tag of a [`ListboxEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    ButtonMouseDown,
    ButtonMouseUp,
    Blur,
    ClearNavSelection,
    ClearTypeahead,
    GetDerivedData,
    KeyDownEscape,
    KeyDownEnter,
    KeyDownSpace,
    KeyDownNavigate,
    KeyDownSearch,
    KeyDownTab,
    KeyDownShiftTab,
    Navigate,
    OptionMouseEnter,
    ValueChange,
    OptionStartClick,
    OptionFinishClick,
    PopoverPointerDown,
    PopoverPointerUp,
    UpdateAfterTypeahead,
}

impl EventKind {
    pub const ALL: [EventKind; 21] = [
        EventKind::ButtonMouseDown,
        EventKind::ButtonMouseUp,
        EventKind::Blur,
        EventKind::ClearNavSelection,
        EventKind::ClearTypeahead,
        EventKind::GetDerivedData,
        EventKind::KeyDownEscape,
        EventKind::KeyDownEnter,
        EventKind::KeyDownSpace,
        EventKind::KeyDownNavigate,
        EventKind::KeyDownSearch,
        EventKind::KeyDownTab,
        EventKind::KeyDownShiftTab,
        EventKind::Navigate,
        EventKind::OptionMouseEnter,
        EventKind::ValueChange,
        EventKind::OptionStartClick,
        EventKind::OptionFinishClick,
        EventKind::PopoverPointerDown,
        EventKind::PopoverPointerUp,
        EventKind::UpdateAfterTypeahead,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ButtonMouseDown => "ButtonMouseDown",
            Self::ButtonMouseUp => "ButtonMouseUp",
            Self::Blur => "Blur",
            Self::ClearNavSelection => "ClearNavSelection",
            Self::ClearTypeahead => "ClearTypeahead",
            Self::GetDerivedData => "GetDerivedData",
            Self::KeyDownEscape => "KeyDownEscape",
            Self::KeyDownEnter => "KeyDownEnter",
            Self::KeyDownSpace => "KeyDownSpace",
            Self::KeyDownNavigate => "KeyDownNavigate",
            Self::KeyDownSearch => "KeyDownSearch",
            Self::KeyDownTab => "KeyDownTab",
            Self::KeyDownShiftTab => "KeyDownShiftTab",
            Self::Navigate => "Navigate",
            Self::OptionMouseEnter => "OptionMouseEnter",
            Self::ValueChange => "ValueChange",
            Self::OptionStartClick => "OptionStartClick",
            Self::OptionFinishClick => "OptionFinishClick",
            Self::PopoverPointerDown => "PopoverPointerDown",
            Self::PopoverPointerUp => "PopoverPointerUp",
            Self::UpdateAfterTypeahead => "UpdateAfterTypeahead",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown listbox event '{0}'")]
pub struct ParseEventError(pub String);

impl FromStr for EventKind {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseEventError(s.to_string()))
    }
}

/// An event as delivered to the machine: the caller's event plus the element
/// handles the host resolved at dispatch time.
#[derive(Clone, Debug)]
pub struct Dispatch<V> {
    pub event: ListboxEvent<V>,
    pub refs: Refs,
}

impl<V> Dispatch<V> {
    pub fn new(event: ListboxEvent<V>, refs: Refs) -> Self {
        Self { event, refs }
    }
}

impl<V> Event for Dispatch<V> {
    type Kind = EventKind;

    fn kind(&self) -> EventKind {
        self.event.kind()
    }
}
