//! Builder for constructing guarded transitions.

use crate::core::{Action, Guard, Schema, Transition};

/// Builder for constructing transitions with a fluent API.
///
/// Actions run in the order they are added.
pub struct TransitionBuilder<M: Schema> {
    target: Option<M::State>,
    guard: Option<Guard<M>>,
    actions: Vec<Action<M>>,
}

impl<M: Schema> TransitionBuilder<M> {
    /// Create a builder for a transition that keeps the current state.
    pub fn new() -> Self {
        Self {
            target: None,
            guard: None,
            actions: Vec::new(),
        }
    }

    /// Set the target state.
    pub fn to(mut self, state: M::State) -> Self {
        self.target = Some(state);
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<M>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, name: &'static str, predicate: F) -> Self
    where
        F: Fn(&M::Context, &M::Event, &M::Env) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(name, predicate));
        self
    }

    /// Append an action.
    pub fn action(mut self, action: Action<M>) -> Self {
        self.actions.push(action);
        self
    }

    /// Append an assignment built from a closure.
    pub fn assign<F>(self, name: &'static str, apply: F) -> Self
    where
        F: Fn(&mut M::Context, &M::Event, &M::Env) + Send + Sync + 'static,
    {
        self.action(Action::assign(name, apply))
    }

    /// Append an effect built from a closure.
    pub fn emit<F>(self, name: &'static str, emit: F) -> Self
    where
        F: Fn(&M::Context, &M::Event, &M::Env) -> Option<M::Effect> + Send + Sync + 'static,
    {
        self.action(Action::emit(name, emit))
    }

    pub fn build(self) -> Transition<M> {
        Transition {
            target: self.target,
            guard: self.guard,
            actions: self.actions,
        }
    }
}

impl<M: Schema> Default for TransitionBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}
