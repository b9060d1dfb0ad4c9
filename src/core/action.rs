//! Transition actions.
//!
//! Actions are the only place a context changes. An `Assign` action edits the
//! transition's private copy of the context; an `Emit` action describes a side
//! effect for the host to perform. Actions never perform effects themselves.

use super::machine::Schema;
use std::fmt;
use std::sync::Arc;

type AssignFn<M> = dyn Fn(&mut <M as Schema>::Context, &<M as Schema>::Event, &<M as Schema>::Env)
    + Send
    + Sync;

type EmitFn<M> = dyn Fn(
        &<M as Schema>::Context,
        &<M as Schema>::Event,
        &<M as Schema>::Env,
    ) -> Option<<M as Schema>::Effect>
    + Send
    + Sync;

/// One step in a transition's ordered action list.
pub enum Action<M: Schema> {
    /// Update the context that the transition will produce.
    Assign {
        name: &'static str,
        apply: Arc<AssignFn<M>>,
    },
    /// Describe an effect, computed from the context as updated by the
    /// actions that ran before it.
    Emit {
        name: &'static str,
        emit: Arc<EmitFn<M>>,
    },
}

impl<M: Schema> Action<M> {
    pub fn assign<F>(name: &'static str, apply: F) -> Self
    where
        F: Fn(&mut M::Context, &M::Event, &M::Env) + Send + Sync + 'static,
    {
        Action::Assign {
            name,
            apply: Arc::new(apply),
        }
    }

    pub fn emit<F>(name: &'static str, emit: F) -> Self
    where
        F: Fn(&M::Context, &M::Event, &M::Env) -> Option<M::Effect> + Send + Sync + 'static,
    {
        Action::Emit {
            name,
            emit: Arc::new(emit),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Assign { name, .. } | Action::Emit { name, .. } => *name,
        }
    }

    /// Run the action against the in-progress context.
    pub(crate) fn run(
        &self,
        context: &mut M::Context,
        event: &M::Event,
        env: &M::Env,
        effects: &mut Vec<M::Effect>,
    ) {
        match self {
            Action::Assign { apply, .. } => apply(context, event, env),
            Action::Emit { emit, .. } => {
                if let Some(effect) = emit(context, event, env) {
                    effects.push(effect);
                }
            }
        }
    }
}

impl<M: Schema> Clone for Action<M> {
    fn clone(&self) -> Self {
        match self {
            Action::Assign { name, apply } => Action::Assign {
                name: *name,
                apply: Arc::clone(apply),
            },
            Action::Emit { name, emit } => Action::Emit {
                name: *name,
                emit: Arc::clone(emit),
            },
        }
    }
}

impl<M: Schema> fmt::Debug for Action<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Assign { name, .. } => f.debug_tuple("Assign").field(name).finish(),
            Action::Emit { name, .. } => f.debug_tuple("Emit").field(name).finish(),
        }
    }
}
