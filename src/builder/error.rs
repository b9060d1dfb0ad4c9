//! Build errors for machine definitions.

use thiserror::Error;

/// Errors that can occur when building a machine definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{0}' has no state node. Declare it with .state()")]
    UndeclaredInitialState(&'static str),

    #[error("State '{0}' declared more than once")]
    DuplicateState(&'static str),

    #[error("Transition on {event} from '{from}' targets undeclared state '{to}'")]
    UndeclaredTarget {
        from: &'static str,
        to: &'static str,
        event: String,
    },
}
