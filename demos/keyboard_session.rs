//! Keyboard Session
//!
//! This demo drives a headless listbox through a keyboard-only session.
//!
//! Key concepts:
//! - Opening with Space and moving the highlight with arrow keys
//! - Typeahead while open only moves the highlight
//! - Enter commits and calls the selection callback
//! - Focus changes are performed on the next frame
//!
//! Run with: RUST_LOG=listbox_machine=debug cargo run --example keyboard_session

use listbox_machine::dom::HeadlessDom;
use listbox_machine::host::{HostError, ListboxService, TracingInspector};
use listbox_machine::listbox::{
    callback, Direction, ListboxEvent, OptionDescriptor, Refs, Selection,
};
use std::rc::Rc;

fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "listbox_machine=debug".to_string()),
        )
        .init();

    println!("=== Keyboard Session ===\n");

    let dom = Rc::new(HeadlessDom::new());
    let doc = dom.document();
    let button = dom.create(doc);
    let popover = dom.create(doc);
    let list = dom.create(popover);
    let fruits = ["Apple", "Banana", "Blueberry", "Cherry"];
    let options: Vec<_> = fruits
        .iter()
        .map(|label| OptionDescriptor::new(label.to_lowercase(), *label).with_element(dom.create(list)))
        .collect();
    let refs = Refs {
        button: Some(button),
        input: None,
        list: Some(list),
        popover: Some(popover),
    };

    let mut listbox = ListboxService::builder(dom.clone(), refs)
        .options(options)
        .value("apple".to_string())
        .inspector(TracingInspector)
        .build()?;

    listbox.subscribe(|snapshot| {
        println!(
            "  -> {:?} (value: {:?}, highlighted: {:?})",
            snapshot.value, snapshot.context.value, snapshot.context.navigation_value
        );
    });

    println!("Space opens the list:");
    listbox.send(ListboxEvent::KeyDownSpace(Selection::highlighted()))?;
    listbox.run_frame();

    println!("ArrowDown twice:");
    listbox.send(ListboxEvent::navigate(Direction::Next))?;
    listbox.send(ListboxEvent::navigate(Direction::Next))?;
    listbox.run_frame();

    println!("Typing 'ch':");
    listbox.send(ListboxEvent::search("c"))?;
    listbox.send(ListboxEvent::search("h"))?;
    listbox.send(ListboxEvent::update_after_typeahead("ch"))?;
    listbox.run_frame();

    println!("Enter commits:");
    let selection = Selection::highlighted()
        .on_change(callback(|value: &String| println!("  selected {value}")));
    listbox.send(ListboxEvent::KeyDownEnter(selection))?;
    listbox.run_frame();

    println!("Tab is ignored while closed:");
    let accepted = listbox.send(ListboxEvent::KeyDownTab)?;
    println!("  accepted: {accepted}");

    println!("\nFocus history: {:?}", dom.focus_log());
    println!("Final value: {:?}", listbox.context().value);

    Ok(())
}
