//! The listbox transition table.

use super::actions;
use super::config::ListboxConfig;
use super::context::ListboxContext;
use super::effect::ListboxEffect;
use super::event::{Dispatch, EventKind};
use super::guards;
use super::state::ListboxState;
use super::types::Value;
use crate::builder::{goto, stay, BuildError, MachineBuilder, StateNodeBuilder, TransitionBuilder};
use crate::core::{Action, Guard, MachineDefinition, Schema, Snapshot};
use crate::dom::Dom;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// Schema of the listbox machine over option values of type `V`.
pub struct Listbox<V>(PhantomData<fn() -> V>);

impl<V: Value> Schema for Listbox<V> {
    type State = ListboxState;
    type Event = Dispatch<V>;
    type Context = ListboxContext<V>;
    type Env = ListboxEnv;
    type Effect = ListboxEffect<V>;
}

pub type ListboxMachine<V> = MachineDefinition<Listbox<V>>;
pub type ListboxSnapshot<V> = Snapshot<ListboxState, ListboxContext<V>>;
pub type ListboxGuard<V> = Guard<Listbox<V>>;
pub type ListboxAction<V> = Action<Listbox<V>>;

type Node<V> = StateNodeBuilder<Listbox<V>>;
type Edge<V> = TransitionBuilder<Listbox<V>>;

/// Read-only capabilities available to guards and actions.
pub struct ListboxEnv {
    dom: Rc<dyn Dom>,
    config: ListboxConfig,
}

impl ListboxEnv {
    pub fn new(dom: Rc<dyn Dom>, config: ListboxConfig) -> Self {
        Self { dom, config }
    }

    pub fn dom(&self) -> &dyn Dom {
        self.dom.as_ref()
    }

    pub fn config(&self) -> &ListboxConfig {
        &self.config
    }
}

impl fmt::Debug for ListboxEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListboxEnv")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Events every state handles without changing state.
fn common_events<V: Value>() -> Node<V> {
    Node::<V>::new()
        .on(
            EventKind::GetDerivedData,
            stay().action(actions::merge_derived_data()),
        )
        .on(
            EventKind::ValueChange,
            stay()
                .action(actions::assign_value_change())
                .action(actions::notify_value_change()),
        )
}

fn commit<V: Value>() -> Edge<V> {
    goto(ListboxState::Idle)
        .guard(guards::option_is_selectable())
        .action(actions::commit_selection())
        .action(actions::notify_selection())
        .action(actions::focus_button())
        .action(actions::clear_typeahead())
}

fn pointer_navigate<V: Value>() -> Edge<V> {
    goto(ListboxState::Navigating)
        .action(actions::navigate())
        .action(actions::clear_typeahead())
        .action(actions::focus_navigation_option())
}

/// Events shared by every open state.
fn open_events<V: Value>() -> Node<V> {
    Node::<V>::new()
        .on(
            EventKind::Blur,
            goto(ListboxState::Idle)
                .guard(guards::listbox_lost_focus())
                .action(actions::clear_typeahead()),
        )
        .on(
            EventKind::Blur,
            goto(ListboxState::Navigating).guard(guards::option_is_active()),
        )
        .on(
            EventKind::Blur,
            goto(ListboxState::Interacting).action(actions::clear_typeahead()),
        )
        .on(EventKind::OptionFinishClick, commit())
        .on(EventKind::KeyDownEnter, commit())
        .on(EventKind::KeyDownSpace, commit())
        .on(
            EventKind::ButtonMouseDown,
            goto(ListboxState::Idle).action(actions::focus_button()),
        )
        .on(
            EventKind::KeyDownEscape,
            goto(ListboxState::Idle).action(actions::focus_button()),
        )
        .on(EventKind::Navigate, pointer_navigate())
        .on(EventKind::OptionMouseEnter, pointer_navigate())
        .on(
            EventKind::OptionStartClick,
            goto(ListboxState::Navigating)
                .guard(guards::event_option_enabled())
                .action(actions::navigate()),
        )
        .on(
            EventKind::KeyDownNavigate,
            goto(ListboxState::NavigatingWithKeys)
                .action(actions::navigate())
                .action(actions::clear_typeahead())
                .action(actions::focus_navigation_option()),
        )
        .on(
            EventKind::KeyDownSearch,
            goto(ListboxState::NavigatingWithKeys).action(actions::append_typeahead()),
        )
        .on(
            EventKind::UpdateAfterTypeahead,
            stay()
                .action(actions::navigation_from_typeahead())
                .action(actions::focus_navigation_option()),
        )
        .on(
            EventKind::ClearTypeahead,
            stay().action(actions::clear_typeahead()),
        )
        .on(
            EventKind::ClearNavSelection,
            stay()
                .action(actions::clear_navigation())
                .action(actions::focus_list()),
        )
}

fn idle<V: Value>(common: &Node<V>) -> Node<V> {
    Node::<V>::new()
        .include(common)
        .on(
            EventKind::ButtonMouseDown,
            goto(ListboxState::Navigating)
                .action(actions::navigation_from_value())
                .action(actions::focus_button()),
        )
        .on(
            EventKind::KeyDownSpace,
            goto(ListboxState::NavigatingWithKeys)
                .action(actions::navigation_from_value())
                .action(actions::focus_navigation_option()),
        )
        .on(
            EventKind::KeyDownSearch,
            stay().action(actions::append_typeahead()),
        )
        .on(
            EventKind::UpdateAfterTypeahead,
            stay()
                .action(actions::value_from_typeahead())
                .action(actions::notify_typeahead()),
        )
        .on(
            EventKind::ClearTypeahead,
            stay().action(actions::clear_typeahead()),
        )
        .on(
            EventKind::KeyDownNavigate,
            goto(ListboxState::NavigatingWithKeys)
                .action(actions::navigation_from_value())
                .action(actions::navigate())
                .action(actions::clear_typeahead())
                .action(actions::focus_navigation_option()),
        )
}

/// Build the listbox machine definition.
///
/// The definition holds no per-widget data and can be shared by any number
/// of services.
pub fn listbox_machine<V: Value>() -> Result<ListboxMachine<V>, BuildError> {
    let common = common_events::<V>();
    let open = open_events::<V>();
    let open_state = || Node::<V>::new().include(&common).include(&open);

    MachineBuilder::new()
        .initial(ListboxState::Idle)
        .state(ListboxState::Idle, idle(&common))
        .state(
            ListboxState::Navigating,
            open_state().on(
                EventKind::ButtonMouseUp,
                stay()
                    .action(actions::focus_list())
                    .action(actions::navigation_from_value())
                    .action(actions::focus_navigation_option()),
            ),
        )
        .state(ListboxState::NavigatingWithKeys, open_state())
        .state(ListboxState::Searching, open_state())
        .state(ListboxState::Interacting, open_state())
        .build()
}
