//! Builders for state nodes and whole machine definitions.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{KindOf, MachineDefinition, Schema, State, StateNode, Transition};
use std::collections::HashMap;

/// Builder for the transitions of one state.
///
/// Calling `on` repeatedly for the same kind appends lower-priority
/// candidates, which is how guard cascades are expressed. `include` copies a
/// shared template (for example events every open state handles).
pub struct StateNodeBuilder<M: Schema> {
    on: Vec<(KindOf<M>, Transition<M>)>,
}

impl<M: Schema> StateNodeBuilder<M> {
    pub fn new() -> Self {
        Self { on: Vec::new() }
    }

    /// Add a candidate transition for `kind`.
    pub fn on(mut self, kind: KindOf<M>, transition: TransitionBuilder<M>) -> Self {
        self.on.push((kind, transition.build()));
        self
    }

    /// Append every candidate declared in `template`.
    pub fn include(mut self, template: &StateNodeBuilder<M>) -> Self {
        self.on.extend(template.on.iter().cloned());
        self
    }

    fn build(self) -> StateNode<M> {
        let mut on: HashMap<KindOf<M>, Vec<Transition<M>>> = HashMap::new();
        for (kind, transition) in self.on {
            on.entry(kind).or_default().push(transition);
        }
        StateNode { on }
    }
}

impl<M: Schema> Clone for StateNodeBuilder<M> {
    fn clone(&self) -> Self {
        Self {
            on: self.on.clone(),
        }
    }
}

impl<M: Schema> Default for StateNodeBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing machine definitions with a fluent API.
pub struct MachineBuilder<M: Schema> {
    initial: Option<M::State>,
    states: Vec<(M::State, StateNodeBuilder<M>)>,
}

impl<M: Schema> MachineBuilder<M> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: M::State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a state and its transitions.
    pub fn state(mut self, state: M::State, node: StateNodeBuilder<M>) -> Self {
        self.states.push((state, node));
        self
    }

    /// Build the machine definition.
    ///
    /// Every transition target and the initial state must be declared.
    pub fn build(self) -> Result<MachineDefinition<M>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut nodes = HashMap::new();
        for (state, node) in self.states {
            if nodes.insert(state, node.build()).is_some() {
                return Err(BuildError::DuplicateState(state.name()));
            }
        }

        if !nodes.contains_key(&initial) {
            return Err(BuildError::UndeclaredInitialState(initial.name()));
        }

        for (from, node) in &nodes {
            for (kind, candidates) in &node.on {
                let undeclared = candidates
                    .iter()
                    .filter_map(|t| t.target)
                    .find(|to| !nodes.contains_key(to));
                if let Some(to) = undeclared {
                    return Err(BuildError::UndeclaredTarget {
                        from: from.name(),
                        to: to.name(),
                        event: format!("{kind:?}"),
                    });
                }
            }
        }

        Ok(MachineDefinition::from_parts(initial, nodes))
    }
}

impl<M: Schema> Default for MachineBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{goto, stay};
    use crate::core::test_support::{Counter, Dial, Tap, TapKind};

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineBuilder::<Counter>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_initial_node() {
        let result = MachineBuilder::<Counter>::new()
            .initial(Dial::Low)
            .state(Dial::High, StateNodeBuilder::new())
            .build();

        assert_eq!(result.err(), Some(BuildError::UndeclaredInitialState("Low")));
    }

    #[test]
    fn builder_rejects_duplicate_states() {
        let result = MachineBuilder::<Counter>::new()
            .initial(Dial::Low)
            .state(Dial::Low, StateNodeBuilder::new())
            .state(Dial::Low, StateNodeBuilder::new())
            .build();

        assert_eq!(result.err(), Some(BuildError::DuplicateState("Low")));
    }

    #[test]
    fn builder_rejects_undeclared_targets() {
        let result = MachineBuilder::<Counter>::new()
            .initial(Dial::Low)
            .state(
                Dial::Low,
                StateNodeBuilder::new().on(TapKind::Bump, goto::<Counter>(Dial::High)),
            )
            .build();

        assert_eq!(
            result.err(),
            Some(BuildError::UndeclaredTarget {
                from: "Low",
                to: "High",
                event: "Bump".to_string(),
            })
        );
    }

    #[test]
    fn include_appends_template_candidates() {
        let template = StateNodeBuilder::<Counter>::new().on(
            TapKind::Reset,
            goto::<Counter>(Dial::Low).assign("zero", |count, _, _| *count = 0),
        );

        let machine = MachineBuilder::new()
            .initial(Dial::Low)
            .state(Dial::Low, StateNodeBuilder::new().include(&template))
            .state(
                Dial::High,
                StateNodeBuilder::new()
                    .include(&template)
                    .on(TapKind::Bump, stay::<Counter>()),
            )
            .build()
            .unwrap();

        assert!(machine.handles(Dial::Low, TapKind::Reset));
        assert!(machine.handles(Dial::High, TapKind::Reset));
        assert!(machine.handles(Dial::High, TapKind::Bump));
        assert!(!machine.handles(Dial::Low, TapKind::Bump));

        let step = machine
            .transition(Dial::High, &7, &Tap::reset(), &0)
            .into_step()
            .unwrap();
        assert_eq!(step.to, Dial::Low);
        assert_eq!(step.context, 0);
    }
}
