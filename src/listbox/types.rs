//! Value and element-handle types shared by the listbox machine.

use crate::dom::ElementId;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::rc::Rc;

/// Anything usable as an option value.
pub trait Value: Clone + PartialEq + Debug + 'static {}

impl<T: Clone + PartialEq + Debug + 'static> Value for T {}

/// Caller-supplied selection callback, invoked with the committed or
/// matched value.
pub type Callback<V> = Rc<dyn Fn(&V)>;

/// Wrap a closure as a [`Callback`].
pub fn callback<V, F>(f: F) -> Callback<V>
where
    F: Fn(&V) + 'static,
{
    Rc::new(f)
}

/// Live handles to the widget's elements.
///
/// These are resolved fresh for every dispatched event; the copy kept in the
/// context is only what `GetDerivedData` last supplied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refs {
    pub button: Option<ElementId>,
    pub input: Option<ElementId>,
    pub list: Option<ElementId>,
    pub popover: Option<ElementId>,
}

impl Refs {
    /// Overlay `patch` on these refs; handles absent from the patch are kept.
    ///
    /// A patch can add or replace handles but never clear one. Unmounting is
    /// reported through the [`RefSource`](crate::host::RefSource), whose refs
    /// are the ones guards and focus effects read.
    pub fn merged(self, patch: Refs) -> Refs {
        Refs {
            button: patch.button.or(self.button),
            input: patch.input.or(self.input),
            list: patch.list.or(self.list),
            popover: patch.popover.or(self.popover),
        }
    }
}

/// One selectable option as registered by the rendering layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionDescriptor<V> {
    pub value: V,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub element: Option<ElementId>,
}

impl<V> OptionDescriptor<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
            element: None,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_element(mut self, element: ElementId) -> Self {
        self.element = Some(element);
        self
    }
}

/// Keyboard navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Next,
    Previous,
    First,
    Last,
}

/// Payload of the commit events (`OptionFinishClick`, `KeyDownEnter`,
/// `KeyDownSpace`).
///
/// With no `value`, the current navigation value is committed.
#[derive(Clone)]
pub struct Selection<V> {
    pub value: Option<V>,
    pub disabled: bool,
    pub callback: Option<Callback<V>>,
}

impl<V> Selection<V> {
    /// Commit whatever option is currently highlighted.
    pub fn highlighted() -> Self {
        Self {
            value: None,
            disabled: false,
            callback: None,
        }
    }

    /// Commit a specific option.
    pub fn of(value: V) -> Self {
        Self {
            value: Some(value),
            disabled: false,
            callback: None,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change(mut self, callback: Callback<V>) -> Self {
        self.callback = Some(callback);
        self
    }
}

impl<V> Default for Selection<V> {
    fn default() -> Self {
        Self::highlighted()
    }
}

impl<V: Debug> Debug for Selection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("value", &self.value)
            .field("disabled", &self.disabled)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
