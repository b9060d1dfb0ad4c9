//! Guarded transition descriptors.

use super::action::Action;
use super::guard::Guard;
use super::machine::Schema;
use std::fmt;

/// A candidate response to one event kind in one state.
///
/// `target: None` keeps the current state while still running the actions.
pub struct Transition<M: Schema> {
    pub target: Option<M::State>,
    pub guard: Option<Guard<M>>,
    pub actions: Vec<Action<M>>,
}

impl<M: Schema> Transition<M> {
    /// Check if this transition can execute for the given input (pure).
    pub fn can_execute(&self, context: &M::Context, event: &M::Event, env: &M::Env) -> bool {
        self.guard
            .as_ref()
            .is_none_or(|g| g.check(context, event, env))
    }
}

impl<M: Schema> Clone for Transition<M> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
            guard: self.guard.clone(),
            actions: self.actions.clone(),
        }
    }
}

impl<M: Schema> fmt::Debug for Transition<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .field("guard", &self.guard)
            .field("actions", &self.actions)
            .finish()
    }
}
