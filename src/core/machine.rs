//! Machine definitions and the table interpreter.

use super::event::Event;
use super::state::State;
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Bundles the types one machine is defined over.
///
/// `Env` is the read-only capability guards and actions may consult (for
/// example a focus model); it is never stored in the context.
pub trait Schema: 'static {
    type State: State;
    type Event: Event;
    type Context: Clone;
    type Env: ?Sized;
    type Effect;
}

/// Event kind of a schema.
pub type KindOf<M> = <<M as Schema>::Event as Event>::Kind;

/// The transitions declared for one state, keyed by event kind.
///
/// Candidates for the same kind keep their declaration order; the first whose
/// guard passes wins.
pub struct StateNode<M: Schema> {
    pub(crate) on: HashMap<KindOf<M>, Vec<Transition<M>>>,
}

impl<M: Schema> StateNode<M> {
    pub fn candidates(&self, kind: KindOf<M>) -> &[Transition<M>] {
        self.on.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<M: Schema> Clone for StateNode<M> {
    fn clone(&self) -> Self {
        Self {
            on: self.on.clone(),
        }
    }
}

/// Current state tag plus context, as published to observers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<S, C> {
    pub value: S,
    pub context: C,
}

impl<S: State, C> Snapshot<S, C> {
    pub fn matches(&self, state: S) -> bool {
        self.value == state
    }
}

/// Outcome of interpreting a single event.
pub enum StepResult<M: Schema> {
    /// A transition fired.
    Transitioned(Step<M>),

    /// The current state declares nothing for this event kind.
    Unhandled,

    /// Candidates exist but every guard rejected the event.
    Blocked { guards: Vec<&'static str> },
}

impl<M: Schema> StepResult<M> {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, StepResult::Transitioned(_))
    }

    pub fn into_step(self) -> Option<Step<M>> {
        match self {
            StepResult::Transitioned(step) => Some(step),
            _ => None,
        }
    }
}

/// A fired transition: the new state, the complete new context, and the
/// effects its actions asked for, in action order.
pub struct Step<M: Schema> {
    pub from: M::State,
    pub to: M::State,
    pub context: M::Context,
    pub effects: Vec<M::Effect>,
}

/// Immutable transition table for a machine.
pub struct MachineDefinition<M: Schema> {
    initial: M::State,
    nodes: HashMap<M::State, StateNode<M>>,
}

impl<M: Schema> MachineDefinition<M> {
    pub(crate) fn from_parts(initial: M::State, nodes: HashMap<M::State, StateNode<M>>) -> Self {
        Self { initial, nodes }
    }

    pub fn initial(&self) -> M::State {
        self.initial
    }

    pub fn initial_snapshot(&self, context: M::Context) -> Snapshot<M::State, M::Context> {
        Snapshot {
            value: self.initial,
            context,
        }
    }

    /// States declared in this definition, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = M::State> + '_ {
        self.nodes.keys().copied()
    }

    /// Whether `state` declares at least one candidate for `kind`.
    pub fn handles(&self, state: M::State, kind: KindOf<M>) -> bool {
        self.nodes
            .get(&state)
            .is_some_and(|node| !node.candidates(kind).is_empty())
    }

    /// Interpret one event (pure).
    ///
    /// Guards are evaluated in declaration order against the current context.
    /// The winning transition's actions run in order on a copy of the context;
    /// the input context is left untouched.
    pub fn transition(
        &self,
        state: M::State,
        context: &M::Context,
        event: &M::Event,
        env: &M::Env,
    ) -> StepResult<M> {
        let candidates = match self.nodes.get(&state) {
            Some(node) => node.candidates(event.kind()),
            None => &[],
        };

        if candidates.is_empty() {
            return StepResult::Unhandled;
        }

        let Some(transition) = candidates
            .iter()
            .find(|t| t.can_execute(context, event, env))
        else {
            return StepResult::Blocked {
                guards: candidates
                    .iter()
                    .filter_map(|t| t.guard.as_ref().map(|g| g.name()))
                    .collect(),
            };
        };

        let mut next = context.clone();
        let mut effects = Vec::new();
        for action in &transition.actions {
            action.run(&mut next, event, env, &mut effects);
        }

        StepResult::Transitioned(Step {
            from: state,
            to: transition.target.unwrap_or(state),
            context: next,
            effects,
        })
    }
}

impl<M: Schema> fmt::Debug for MachineDefinition<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineDefinition")
            .field("initial", &self.initial)
            .field("states", &self.nodes.len())
            .finish()
    }
}
