//! Listbox Machine: the interaction logic of a listbox select control as a
//! pure state machine.
//!
//! The widget's behavior lives in a declarative transition table that is
//! interpreted by pure functions: given a snapshot and an event, the machine
//! returns the next snapshot and a list of effects to perform. Nothing in
//! the core touches the focus model directly. A thin host adapter
//! ([`host::ListboxService`]) installs snapshots, runs callbacks and performs
//! focus changes on the next frame.
//!
//! # Layers
//!
//! - [`core`]: generic states, events, guards, actions and the interpreter
//! - [`builder`]: fluent construction and validation of transition tables
//! - [`dom`]: the focus model guards consult, plus a headless implementation
//! - [`listbox`]: the listbox states, events, context and transition table
//! - [`host`]: the imperative shell that runs one widget
//!
//! # Example
//!
//! ```rust
//! use listbox_machine::dom::HeadlessDom;
//! use listbox_machine::host::ListboxService;
//! use listbox_machine::listbox::{
//!     Direction, ListboxEvent, ListboxState, OptionDescriptor, Refs, Selection,
//! };
//! use std::rc::Rc;
//!
//! # fn main() -> Result<(), listbox_machine::host::HostError> {
//! let dom = Rc::new(HeadlessDom::new());
//! let doc = dom.document();
//! let button = dom.create(doc);
//! let popover = dom.create(doc);
//! let list = dom.create(popover);
//! let refs = Refs {
//!     button: Some(button),
//!     input: None,
//!     list: Some(list),
//!     popover: Some(popover),
//! };
//!
//! let mut listbox = ListboxService::<&str>::builder(dom.clone(), refs)
//!     .options(vec![
//!         OptionDescriptor::new("apple", "Apple"),
//!         OptionDescriptor::new("pear", "Pear"),
//!     ])
//!     .build()?;
//!
//! listbox.send(ListboxEvent::ButtonMouseDown)?;
//! assert_eq!(listbox.state(), ListboxState::Navigating);
//!
//! listbox.send(ListboxEvent::navigate(Direction::Next))?;
//! assert_eq!(listbox.context().navigation_value, Some("apple"));
//!
//! listbox.send(ListboxEvent::KeyDownEnter(Selection::highlighted()))?;
//! assert_eq!(listbox.state(), ListboxState::Idle);
//! assert_eq!(listbox.context().value, Some("apple"));
//!
//! listbox.run_frame();
//! assert_eq!(dom.focus_log().last(), Some(&button));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod dom;
pub mod host;
pub mod listbox;

pub use builder::{BuildError, MachineBuilder};
pub use self::core::{MachineDefinition, Schema, Snapshot, State, StepResult};
pub use host::{HostError, ListboxService};
pub use listbox::{listbox_machine, ListboxEvent, ListboxState};
