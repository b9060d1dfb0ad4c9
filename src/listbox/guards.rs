//! Guards consulted by the listbox transition table.

use super::context::ListboxContext;
use super::event::{Dispatch, ListboxEvent};
use super::machine::ListboxGuard;
use super::options;
use super::types::{Selection, Value};
use crate::dom::{Dom, ElementId};

/// The element focus is moving to: the blur's related target, falling back
/// to the active element of the popover's document.
fn focus_target<V>(dispatch: &Dispatch<V>, dom: &dyn Dom) -> Option<ElementId> {
    let related = match &dispatch.event {
        ListboxEvent::Blur { related_target } => *related_target,
        _ => None,
    };
    related.or_else(|| dom.active_element(dispatch.refs.popover))
}

pub(crate) fn lost_focus<V>(dispatch: &Dispatch<V>, dom: &dyn Dom) -> bool {
    if !matches!(dispatch.event, ListboxEvent::Blur { .. }) {
        return false;
    }
    let Some(popover) = dispatch.refs.popover else {
        return true;
    };
    match focus_target(dispatch, dom) {
        Some(target) => Some(target) != dispatch.refs.list && !dom.contains(popover, target),
        None => true,
    }
}

pub(crate) fn option_focused<V>(
    context: &ListboxContext<V>,
    dispatch: &Dispatch<V>,
    dom: &dyn Dom,
) -> bool {
    let Some(target) = focus_target(dispatch, dom) else {
        return false;
    };
    context
        .options
        .iter()
        .any(|option| option.element == Some(target))
}

pub(crate) fn selection_of<V>(event: &ListboxEvent<V>) -> Option<&Selection<V>> {
    match event {
        ListboxEvent::KeyDownEnter(selection)
        | ListboxEvent::KeyDownSpace(selection)
        | ListboxEvent::OptionFinishClick(selection) => Some(selection),
        _ => None,
    }
}

fn selectable<V: Value>(context: &ListboxContext<V>, selection: &Selection<V>) -> bool {
    if selection.disabled {
        return false;
    }
    let Some(navigation) = context.navigation_value.as_ref() else {
        return false;
    };
    let target = selection.value.as_ref().unwrap_or(navigation);
    !options::find_by_value(&context.options, target).is_some_and(|option| option.disabled)
}

/// Focus has left the popover: the popover is not mounted, or neither the
/// list nor anything inside the popover has focus.
pub fn listbox_lost_focus<V: Value>() -> ListboxGuard<V> {
    ListboxGuard::<V>::new("listbox_lost_focus", |_, dispatch, env| {
        lost_focus(dispatch, env.dom())
    })
}

/// Focus landed on one of the registered option elements.
pub fn option_is_active<V: Value>() -> ListboxGuard<V> {
    ListboxGuard::<V>::new("option_is_active", |context, dispatch, env| {
        option_focused(context, dispatch, env.dom())
    })
}

/// An option is highlighted and neither the event nor the registry marks
/// the committed option disabled.
pub fn option_is_selectable<V: Value>() -> ListboxGuard<V> {
    ListboxGuard::<V>::new("option_is_selectable", |context, dispatch, _| {
        selection_of(&dispatch.event).is_some_and(|selection| selectable(context, selection))
    })
}

/// The pressed option is not disabled.
pub fn event_option_enabled<V: Value>() -> ListboxGuard<V> {
    ListboxGuard::<V>::new("event_option_enabled", |_, dispatch, _| {
        matches!(
            dispatch.event,
            ListboxEvent::OptionStartClick {
                disabled: false,
                ..
            }
        )
    })
}
