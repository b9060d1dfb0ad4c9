//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for declaring transition
//! tables with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::{MachineBuilder, StateNodeBuilder};
pub use transition::TransitionBuilder;

use crate::core::Schema;

/// Start a transition that moves to `target`.
///
/// # Example
///
/// ```
/// use listbox_machine::builder::goto;
/// use listbox_machine::listbox::{Listbox, ListboxState};
///
/// let transition = goto::<Listbox<u32>>(ListboxState::Idle).build();
/// assert_eq!(transition.target, Some(ListboxState::Idle));
/// ```
pub fn goto<M: Schema>(target: M::State) -> TransitionBuilder<M> {
    TransitionBuilder::new().to(target)
}

/// Start a transition that keeps the current state.
pub fn stay<M: Schema>() -> TransitionBuilder<M> {
    TransitionBuilder::new()
}
