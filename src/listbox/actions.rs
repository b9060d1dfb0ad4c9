//! Actions run by the listbox transition table.
//!
//! Assignments edit the transition's copy of the context. Effects are only
//! described here; the host performs them.

use super::effect::{FocusTarget, ListboxEffect};
use super::event::ListboxEvent;
use super::guards::selection_of;
use super::machine::ListboxAction;
use super::options;
use super::types::Value;
use std::rc::Rc;

pub fn navigation_from_value<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::assign("navigation_from_value", |context, _, _| {
        context.navigation_value = context.value.clone();
    })
}

/// Highlight the option an event points at.
///
/// `KeyDownNavigate` without an explicit value steps from the current
/// navigation value. Nothing changes when no target resolves.
pub fn navigate<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::assign("navigate", |context, dispatch, env| {
        let target = match &dispatch.event {
            ListboxEvent::Navigate { value }
            | ListboxEvent::OptionMouseEnter { value }
            | ListboxEvent::OptionStartClick { value, .. } => Some(value.clone()),
            ListboxEvent::KeyDownNavigate { direction, value } => value.clone().or_else(|| {
                options::step(
                    &context.options,
                    context.navigation_value.as_ref(),
                    *direction,
                    env.config().wrap_navigation,
                )
            }),
            _ => None,
        };
        if target.is_some() {
            context.navigation_value = target;
        }
    })
}

pub fn clear_navigation<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::assign("clear_navigation", |context, _, _| {
        context.navigation_value = None;
    })
}

pub fn append_typeahead<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::assign("append_typeahead", |context, dispatch, _| {
        if let ListboxEvent::KeyDownSearch { query } = &dispatch.event {
            context
                .typeahead_query
                .get_or_insert_with(String::new)
                .push_str(query);
        }
    })
}

pub fn clear_typeahead<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::assign("clear_typeahead", |context, _, _| {
        context.typeahead_query = None;
    })
}

/// Closed widget: a typeahead match commits the value.
pub fn value_from_typeahead<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::assign("value_from_typeahead", |context, dispatch, _| {
        if let ListboxEvent::UpdateAfterTypeahead { query, .. } = &dispatch.event {
            if let Some(found) = options::find_by_typeahead(&context.options, query) {
                context.value = Some(found.value.clone());
            }
        }
    })
}

pub fn notify_typeahead<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::emit("notify_typeahead", |context, dispatch, _| {
        let ListboxEvent::UpdateAfterTypeahead {
            query,
            callback: Some(callback),
        } = &dispatch.event
        else {
            return None;
        };
        options::find_by_typeahead(&context.options, query).map(|found| ListboxEffect::Notify {
            callback: Rc::clone(callback),
            value: found.value.clone(),
        })
    })
}

/// Open widget: a typeahead match only moves the highlight.
pub fn navigation_from_typeahead<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::assign("navigation_from_typeahead", |context, dispatch, _| {
        if let ListboxEvent::UpdateAfterTypeahead { query, .. } = &dispatch.event {
            if let Some(found) = options::find_by_typeahead(&context.options, query) {
                context.navigation_value = Some(found.value.clone());
            }
        }
    })
}

/// Commit the selection payload's value, or the highlighted one.
pub fn commit_selection<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::assign("commit_selection", |context, dispatch, _| {
        if let Some(selection) = selection_of(&dispatch.event) {
            let value = selection
                .value
                .clone()
                .or_else(|| context.navigation_value.clone());
            if value.is_some() {
                context.value = value;
            }
        }
    })
}

pub fn notify_selection<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::emit("notify_selection", |context, dispatch, _| {
        let callback = selection_of(&dispatch.event)?.callback.as_ref()?;
        Some(ListboxEffect::Notify {
            callback: Rc::clone(callback),
            value: context.value.clone()?,
        })
    })
}

pub fn assign_value_change<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::assign("assign_value_change", |context, dispatch, _| {
        if let ListboxEvent::ValueChange { value, .. } = &dispatch.event {
            context.value = Some(value.clone());
        }
    })
}

pub fn notify_value_change<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::emit("notify_value_change", |_, dispatch, _| match &dispatch.event {
        ListboxEvent::ValueChange {
            value,
            callback: Some(callback),
        } => Some(ListboxEffect::Notify {
            callback: Rc::clone(callback),
            value: value.clone(),
        }),
        _ => None,
    })
}

pub fn merge_derived_data<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::assign("merge_derived_data", |context, dispatch, _| {
        if let ListboxEvent::GetDerivedData(patch) = &dispatch.event {
            context.apply_patch(patch);
        }
    })
}

pub fn focus_button<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::emit("focus_button", |_, dispatch, _| {
        dispatch
            .refs
            .button
            .map(|button| ListboxEffect::Focus(FocusTarget::Element(button)))
    })
}

pub fn focus_list<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::emit("focus_list", |_, dispatch, _| {
        dispatch
            .refs
            .list
            .map(|list| ListboxEffect::Focus(FocusTarget::Element(list)))
    })
}

/// Focus the highlighted option on the next frame, resolved at that time.
pub fn focus_navigation_option<V: Value>() -> ListboxAction<V> {
    ListboxAction::<V>::emit("focus_navigation_option", |_, _, _| {
        Some(ListboxEffect::Focus(FocusTarget::NavigationOption))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementId, HeadlessDom};
    use crate::listbox::config::ListboxConfig;
    use crate::listbox::context::{ContextPatch, ListboxContext};
    use crate::listbox::event::Dispatch;
    use crate::listbox::machine::ListboxEnv;
    use crate::listbox::types::{callback, Direction, OptionDescriptor, Refs, Selection};

    fn env() -> ListboxEnv {
        ListboxEnv::new(Rc::new(HeadlessDom::new()), ListboxConfig::default())
    }

    fn context() -> ListboxContext<u32> {
        ListboxContext::new(Some(1)).with_options(vec![
            OptionDescriptor::new(1, "One"),
            OptionDescriptor::new(2, "Two"),
        ])
    }

    fn run(
        action: ListboxAction<u32>,
        context: &mut ListboxContext<u32>,
        event: ListboxEvent<u32>,
        refs: Refs,
    ) -> Vec<ListboxEffect<u32>> {
        let mut effects = Vec::new();
        action.run(context, &Dispatch::new(event, refs), &env(), &mut effects);
        effects
    }

    #[test]
    fn typeahead_query_accumulates() {
        let mut ctx = context();
        run(append_typeahead(), &mut ctx, ListboxEvent::search("t"), Refs::default());
        run(append_typeahead(), &mut ctx, ListboxEvent::search("w"), Refs::default());

        assert_eq!(ctx.typeahead_query.as_deref(), Some("tw"));

        run(clear_typeahead(), &mut ctx, ListboxEvent::ClearTypeahead, Refs::default());
        assert_eq!(ctx.typeahead_query, None);
    }

    #[test]
    fn explicit_navigation_target_wins_over_direction() {
        let mut ctx = context();
        let event = ListboxEvent::KeyDownNavigate {
            direction: Direction::First,
            value: Some(2),
        };

        run(navigate(), &mut ctx, event, Refs::default());

        assert_eq!(ctx.navigation_value, Some(2));
    }

    #[test]
    fn unresolvable_navigation_keeps_highlight() {
        let mut ctx = ListboxContext::new(None);
        ctx.navigation_value = Some(7);

        run(navigate(), &mut ctx, ListboxEvent::navigate(Direction::Next), Refs::default());

        assert_eq!(ctx.navigation_value, Some(7));
    }

    #[test]
    fn unmatched_typeahead_changes_nothing() {
        let mut ctx = context();
        let event = ListboxEvent::update_after_typeahead("x");

        run(value_from_typeahead(), &mut ctx, event.clone(), Refs::default());
        run(navigation_from_typeahead(), &mut ctx, event.clone(), Refs::default());
        let effects = run(notify_typeahead(), &mut ctx, event, Refs::default());

        assert_eq!(ctx.value, Some(1));
        assert_eq!(ctx.navigation_value, None);
        assert!(effects.is_empty());
    }

    #[test]
    fn commit_prefers_payload_value() {
        let mut ctx = context();
        ctx.navigation_value = Some(1);

        run(
            commit_selection(),
            &mut ctx,
            ListboxEvent::OptionFinishClick(Selection::of(2)),
            Refs::default(),
        );

        assert_eq!(ctx.value, Some(2));
    }

    #[test]
    fn selection_without_callback_notifies_nobody() {
        let mut ctx = context();
        let effects = run(
            notify_selection(),
            &mut ctx,
            ListboxEvent::KeyDownEnter(Selection::highlighted()),
            Refs::default(),
        );

        assert!(effects.is_empty());
    }

    #[test]
    fn value_change_assigns_and_notifies() {
        let mut ctx = context();
        let event = ListboxEvent::ValueChange {
            value: 2,
            callback: Some(callback(|_: &u32| {})),
        };

        run(assign_value_change(), &mut ctx, event.clone(), Refs::default());
        let effects = run(notify_value_change(), &mut ctx, event, Refs::default());

        assert_eq!(ctx.value, Some(2));
        assert!(matches!(
            effects.as_slice(),
            [ListboxEffect::Notify { value: 2, .. }]
        ));
    }

    #[test]
    fn derived_data_replaces_options_and_merges_refs() {
        let mut ctx = context();
        ctx.refs.button = Some(ElementId(1));
        let patch = ContextPatch::new()
            .with_options(vec![OptionDescriptor::new(5, "Five")])
            .with_refs(Refs {
                list: Some(ElementId(2)),
                ..Refs::default()
            });

        run(
            merge_derived_data(),
            &mut ctx,
            ListboxEvent::GetDerivedData(patch),
            Refs::default(),
        );

        assert_eq!(ctx.options.len(), 1);
        assert_eq!(ctx.refs.button, Some(ElementId(1)));
        assert_eq!(ctx.refs.list, Some(ElementId(2)));
        assert_eq!(ctx.value, Some(1));
    }

    #[test]
    fn focus_requests_need_a_mounted_element() {
        let mut ctx = context();
        let refs = Refs {
            button: Some(ElementId(4)),
            ..Refs::default()
        };

        let button = run(focus_button(), &mut ctx, ListboxEvent::KeyDownEscape, refs);
        let list = run(focus_list(), &mut ctx, ListboxEvent::KeyDownEscape, refs);

        assert!(matches!(
            button.as_slice(),
            [ListboxEffect::Focus(FocusTarget::Element(ElementId(4)))]
        ));
        assert!(list.is_empty());
    }
}
