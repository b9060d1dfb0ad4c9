//! Core State trait for state machine states.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are small closed enumerations. They are used as keys in the
/// transition table, so they must be cheap to copy and hashable.
///
/// # Example
///
/// ```rust
/// use listbox_machine::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Closed,
///     Open,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;
}
