//! Host adapter errors.

use crate::builder::BuildError;
use crate::listbox::{EventKind, ParseEventError};
use thiserror::Error;

/// Errors surfaced by [`ListboxService`](super::ListboxService).
///
/// Interaction outcomes are never errors: an event the current state does
/// not accept is simply dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("Listbox service has been stopped")]
    Stopped,

    #[error("Event {0} carries a payload and cannot be sent by name")]
    PayloadRequired(EventKind),

    #[error(transparent)]
    UnknownEvent(#[from] ParseEventError),

    #[error("Invalid machine definition: {0}")]
    Definition(#[from] BuildError),
}
