//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over the current context, the event
//! being handled and the read-only environment. They gate whether a
//! candidate transition may fire.

use super::machine::Schema;
use std::fmt;
use std::sync::Arc;

type Predicate<M> = dyn Fn(&<M as Schema>::Context, &<M as Schema>::Event, &<M as Schema>::Env) -> bool
    + Send
    + Sync;

/// Named pure predicate that determines if a transition can execute.
///
/// The name shows up in diagnostics when every candidate for an event is
/// rejected.
pub struct Guard<M: Schema> {
    name: &'static str,
    predicate: Arc<Predicate<M>>,
}

impl<M: Schema> Guard<M> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&M::Context, &M::Event, &M::Env) -> bool + Send + Sync + 'static,
    {
        Guard {
            name,
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the transition.
    pub fn check(&self, context: &M::Context, event: &M::Event, env: &M::Env) -> bool {
        (self.predicate)(context, event, env)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<M: Schema> Clone for Guard<M> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<M: Schema> fmt::Debug for Guard<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}
