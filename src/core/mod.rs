//! Core state machine types and logic.
//!
//! This module contains the pure core of the state machine:
//! - States and events via the `State` and `Event` traits
//! - Guards and actions attached to transitions
//! - The table interpreter, `MachineDefinition::transition`
//!
//! Interpreting an event yields a new context and a list of effect
//! descriptions. Performing those effects is left to the host.

mod action;
mod event;
mod guard;
mod machine;
mod state;
mod transition;

pub use action::Action;
pub use event::Event;
pub use guard::Guard;
pub use machine::{KindOf, MachineDefinition, Schema, Snapshot, StateNode, Step, StepResult};
pub use state::State;
pub use transition::Transition;

#[cfg(test)]
pub(crate) mod test_support {
    //! A tiny counter machine shared by the core and builder tests.

    use super::{Event, Schema};

    crate::state_enum! {
        pub(crate) enum Dial {
            Low,
            High,
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub(crate) enum TapKind {
        Bump,
        Reset,
    }

    #[derive(Clone, Debug)]
    pub(crate) struct Tap {
        pub(crate) kind: TapKind,
        pub(crate) step: u32,
    }

    impl Tap {
        pub(crate) fn bump(step: u32) -> Self {
            Self {
                kind: TapKind::Bump,
                step,
            }
        }

        pub(crate) fn reset() -> Self {
            Self {
                kind: TapKind::Reset,
                step: 0,
            }
        }
    }

    impl Event for Tap {
        type Kind = TapKind;

        fn kind(&self) -> TapKind {
            self.kind
        }
    }

    /// Context is a running count; the environment is a limit.
    pub(crate) struct Counter;

    impl Schema for Counter {
        type State = Dial;
        type Event = Tap;
        type Context = u32;
        type Env = u32;
        type Effect = String;
    }
}
