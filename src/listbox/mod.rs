//! The listbox widget machine.
//!
//! States, events, context and the guard/action library that make up the
//! interaction logic of a listbox-style select control. The table itself is
//! built by [`listbox_machine`].

pub mod actions;
pub mod config;
pub mod context;
pub mod effect;
pub mod event;
pub mod guards;
pub mod machine;
pub mod options;
pub mod state;
pub mod types;

pub use config::ListboxConfig;
pub use context::{ContextPatch, ListboxContext};
pub use effect::{FocusTarget, ListboxEffect};
pub use event::{Dispatch, EventKind, ListboxEvent, ParseEventError};
pub use machine::{
    listbox_machine, Listbox, ListboxAction, ListboxEnv, ListboxGuard, ListboxMachine,
    ListboxSnapshot,
};
pub use state::ListboxState;
pub use types::{callback, Callback, Direction, OptionDescriptor, Refs, Selection, Value};
