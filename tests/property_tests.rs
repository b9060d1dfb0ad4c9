//! Property-based tests for the listbox machine.
//!
//! These tests use proptest to drive the service with arbitrary event
//! sequences and check the invariants that must hold after every step.

mod common;

use common::Widget;
use listbox_machine::core::StepResult;
use listbox_machine::host::ListboxService;
use listbox_machine::listbox::{
    listbox_machine, ContextPatch, Direction, Dispatch, EventKind, ListboxConfig,
    ListboxContext, ListboxEnv, ListboxEvent, ListboxState, OptionDescriptor, Selection,
};
use proptest::prelude::*;
use std::rc::Rc;

fn arbitrary_state() -> impl Strategy<Value = ListboxState> {
    prop::sample::select(ListboxState::ALL.to_vec())
}

fn arbitrary_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Next),
        Just(Direction::Previous),
        Just(Direction::First),
        Just(Direction::Last),
    ]
}

fn arbitrary_value() -> impl Strategy<Value = u32> {
    1..=3u32
}

/// Events a user can produce, without callbacks.
fn arbitrary_event() -> impl Strategy<Value = ListboxEvent<u32>> {
    prop_oneof![
        Just(ListboxEvent::ButtonMouseDown),
        Just(ListboxEvent::ButtonMouseUp),
        Just(ListboxEvent::Blur {
            related_target: None
        }),
        Just(ListboxEvent::ClearNavSelection),
        Just(ListboxEvent::ClearTypeahead),
        Just(ListboxEvent::KeyDownEscape),
        Just(ListboxEvent::KeyDownTab),
        Just(ListboxEvent::KeyDownShiftTab),
        Just(ListboxEvent::PopoverPointerDown),
        Just(ListboxEvent::PopoverPointerUp),
        Just(ListboxEvent::KeyDownEnter(Selection::highlighted())),
        Just(ListboxEvent::KeyDownSpace(Selection::highlighted())),
        arbitrary_direction().prop_map(ListboxEvent::<u32>::navigate),
        arbitrary_value().prop_map(|value| ListboxEvent::Navigate { value }),
        arbitrary_value().prop_map(|value| ListboxEvent::OptionMouseEnter { value }),
        (arbitrary_value(), any::<bool>())
            .prop_map(|(value, disabled)| ListboxEvent::OptionStartClick { value, disabled }),
        arbitrary_value()
            .prop_map(|value| ListboxEvent::OptionFinishClick(Selection::of(value))),
        "[a-c]".prop_map(ListboxEvent::<u32>::search),
        "[a-c]{0,2}".prop_map(ListboxEvent::<u32>::update_after_typeahead),
        // enabled values only: an external value change bypasses selection guards
        (1..=2u32).prop_map(|value| ListboxEvent::ValueChange {
            value,
            callback: None
        }),
    ]
}

fn is_commit(kind: EventKind) -> bool {
    matches!(
        kind,
        EventKind::KeyDownEnter
            | EventKind::KeyDownSpace
            | EventKind::OptionFinishClick
            | EventKind::UpdateAfterTypeahead
            | EventKind::ValueChange
    )
}

fn registry() -> Vec<OptionDescriptor<u32>> {
    vec![
        OptionDescriptor::new(1, "Apple"),
        OptionDescriptor::new(2, "Banana"),
        OptionDescriptor::new(3, "Cherry").disabled(),
    ]
}

proptest! {
    #[test]
    fn derived_data_never_changes_state(state in arbitrary_state(), value in arbitrary_value()) {
        let widget = Widget::new();
        let machine = listbox_machine::<u32>().unwrap();
        let env = ListboxEnv::new(widget.dom.clone(), ListboxConfig::default());
        let context = ListboxContext::new(Some(value)).with_options(registry());
        let event = Dispatch::new(
            ListboxEvent::GetDerivedData(ContextPatch::new().with_refs(widget.refs)),
            widget.refs,
        );

        let step = machine.transition(state, &context, &event, &env).into_step();

        prop_assert!(step.is_some());
        let step = step.unwrap();
        prop_assert_eq!(step.to, state);
        prop_assert_eq!(step.context.value, Some(value));
    }

    #[test]
    fn interpreting_leaves_input_context_untouched(
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let widget = Widget::new();
        let machine = listbox_machine::<u32>().unwrap();
        let env = ListboxEnv::new(widget.dom.clone(), ListboxConfig::default());
        let context = ListboxContext::new(Some(1)).with_options(registry());
        let before = context.clone();

        let _ = machine.transition(state, &context, &Dispatch::new(event, widget.refs), &env);

        prop_assert_eq!(context, before);
    }

    #[test]
    fn undeclared_events_are_reported_unhandled(
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let widget = Widget::new();
        let machine = listbox_machine::<u32>().unwrap();
        let env = ListboxEnv::new(widget.dom.clone(), ListboxConfig::default());
        let context = ListboxContext::new(None).with_options(registry());
        let declared = machine.handles(state, event.kind());

        let result = machine.transition(state, &context, &Dispatch::new(event, widget.refs), &env);

        prop_assert_eq!(matches!(result, StepResult::Unhandled), !declared);
    }

    #[test]
    fn navigate_lands_in_navigating(
        events in prop::collection::vec(arbitrary_event(), 0..12),
        target in arbitrary_value(),
    ) {
        let widget = Widget::new();
        let mut listbox = widget.service();
        for event in events {
            listbox.send(event).unwrap();
        }
        listbox.send(ListboxEvent::ButtonMouseDown).unwrap();
        if !listbox.state().is_open() {
            listbox.send(ListboxEvent::ButtonMouseDown).unwrap();
        }

        listbox.send(ListboxEvent::Navigate { value: target }).unwrap();

        prop_assert_eq!(listbox.state(), ListboxState::Navigating);
        prop_assert_eq!(listbox.context().navigation_value, Some(target));
    }

    #[test]
    fn value_changes_only_on_commit(events in prop::collection::vec(arbitrary_event(), 0..24)) {
        let widget = Widget::new();
        let mut listbox = widget.service_with_value(1);

        for event in events {
            let kind = event.kind();
            let before = listbox.context().value;
            listbox.send(event).unwrap();

            if !is_commit(kind) {
                prop_assert_eq!(listbox.context().value, before, "changed by {}", kind);
            }
        }
    }

    #[test]
    fn rejected_events_keep_the_same_snapshot(events in prop::collection::vec(arbitrary_event(), 0..24)) {
        let widget = Widget::new();
        let mut listbox = widget.service();

        for event in events {
            let before = listbox.snapshot();
            let accepted = listbox.send(event).unwrap();

            prop_assert_eq!(Rc::ptr_eq(&before, &listbox.snapshot()), !accepted);
        }
    }

    #[test]
    fn committed_value_is_never_a_disabled_option(
        events in prop::collection::vec(arbitrary_event(), 0..24),
    ) {
        let widget = Widget::new();
        let mut listbox = ListboxService::builder(widget.dom.clone(), widget.refs)
            .options(registry())
            .build()
            .unwrap();

        for event in events {
            listbox.send(event).unwrap();
            prop_assert_ne!(listbox.context().value, Some(3));
        }
    }
}
