//! Event trait for machine inputs.

use std::fmt::Debug;
use std::hash::Hash;

/// An input delivered to a machine.
///
/// Events are tagged messages. The transition table is keyed by the tag
/// (`Kind`), while guards and actions see the whole event with its payload.
pub trait Event {
    /// Payload-free tag of the event.
    type Kind: Copy + Eq + Hash + Debug + 'static;

    /// The tag used to look up candidate transitions.
    fn kind(&self) -> Self::Kind;
}
