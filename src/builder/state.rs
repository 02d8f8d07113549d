//! Fluent configurer for a single state.

use crate::builder::error::BuildError;
use crate::core::{
    ActionBehaviour, ActionKind, Configuration, DestinationSelector, State, Trigger,
    TransitionGuard, TriggerBehaviour,
};

/// Declares actions, transitions and hierarchy for one state.
///
/// Obtained from [`ConfigurationBuilder::configure`](super::ConfigurationBuilder::configure).
/// Every method consumes and returns the configurer so declarations chain;
/// the ones that can violate a structural rule return `Result`.
pub struct StateConfigurer<'a, S: State, T: Trigger> {
    config: &'a mut Configuration<S, T>,
    state: S,
}

impl<'a, S: State, T: Trigger> StateConfigurer<'a, S, T> {
    pub(crate) fn new(config: &'a mut Configuration<S, T>, state: S) -> Self {
        config.get_or_insert(state.clone());
        Self { config, state }
    }

    /// The state being configured.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Transition to `destination` when `trigger` fires.
    pub fn permit(self, trigger: T, destination: S) -> Result<Self, BuildError> {
        self.permit_if(trigger, destination, TransitionGuard::none())
    }

    /// Guarded transition to `destination`.
    pub fn permit_if(
        self,
        trigger: T,
        destination: S,
        guard: impl Into<TransitionGuard>,
    ) -> Result<Self, BuildError> {
        if destination == self.state {
            return Err(BuildError::SelfTransition {
                state: self.state.name().to_string(),
                trigger: trigger.name().to_string(),
            });
        }
        Ok(self.behaviour(TriggerBehaviour::Transitioning {
            trigger,
            destination,
            guard: guard.into(),
        }))
    }

    /// Exit and re-enter this state when `trigger` fires.
    pub fn permit_reentry(self, trigger: T) -> Self {
        self.permit_reentry_if(trigger, TransitionGuard::none())
    }

    pub fn permit_reentry_if(self, trigger: T, guard: impl Into<TransitionGuard>) -> Self {
        let destination = self.state.clone();
        self.behaviour(TriggerBehaviour::Reentry {
            trigger,
            destination,
            guard: guard.into(),
        })
    }

    /// Handle `trigger` without leaving the state.
    pub fn internal_transition(self, trigger: T) -> Self {
        self.internal_transition_if(trigger, TransitionGuard::none())
    }

    pub fn internal_transition_if(self, trigger: T, guard: impl Into<TransitionGuard>) -> Self {
        self.behaviour(TriggerBehaviour::Internal {
            trigger,
            guard: guard.into(),
        })
    }

    /// Accept `trigger` and do nothing.
    pub fn ignore(self, trigger: T) -> Self {
        self.ignore_if(trigger, TransitionGuard::none())
    }

    pub fn ignore_if(self, trigger: T, guard: impl Into<TransitionGuard>) -> Self {
        self.behaviour(TriggerBehaviour::Ignored {
            trigger,
            guard: guard.into(),
        })
    }

    /// Transition to a destination chosen when `trigger` fires.
    pub fn permit_dynamic<F>(self, trigger: T, selector: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.permit_dynamic_if(trigger, selector, TransitionGuard::none())
    }

    pub fn permit_dynamic_if<F>(
        self,
        trigger: T,
        selector: F,
        guard: impl Into<TransitionGuard>,
    ) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.behaviour(TriggerBehaviour::Dynamic {
            trigger,
            selector: DestinationSelector::new(selector),
            guard: guard.into(),
        })
    }

    /// Action run on every entry.
    pub fn on_entry(self, description: impl Into<String>) -> Self {
        self.action(ActionKind::Entry, ActionBehaviour::unconditional(description))
    }

    /// Action run only when entering because of `trigger`.
    pub fn on_entry_from(self, trigger: T, description: impl Into<String>) -> Self {
        self.action(
            ActionKind::Entry,
            ActionBehaviour::from_trigger(trigger, description),
        )
    }

    pub fn on_exit(self, description: impl Into<String>) -> Self {
        self.action(ActionKind::Exit, ActionBehaviour::unconditional(description))
    }

    pub fn on_activate(self, description: impl Into<String>) -> Self {
        self.action(ActionKind::Activate, ActionBehaviour::unconditional(description))
    }

    pub fn on_deactivate(self, description: impl Into<String>) -> Self {
        self.action(
            ActionKind::Deactivate,
            ActionBehaviour::unconditional(description),
        )
    }

    /// Nest this state inside `superstate`.
    ///
    /// Repeating the same relation is a no-op. A state can only have one
    /// superstate and the hierarchy must stay acyclic.
    pub fn substate_of(self, superstate: S) -> Result<Self, BuildError> {
        if superstate == self.state {
            return Err(BuildError::SelfSuperstate {
                state: self.state.name().to_string(),
            });
        }

        if let Some(existing) = self.config.get(&self.state).and_then(|r| r.superstate()) {
            if *existing == superstate {
                return Ok(self);
            }
            return Err(BuildError::AlreadySubstate {
                state: self.state.name().to_string(),
                existing: existing.name().to_string(),
                requested: superstate.name().to_string(),
            });
        }

        if self.is_ancestor_of(&superstate) {
            return Err(BuildError::CircularHierarchy {
                state: self.state.name().to_string(),
                superstate: superstate.name().to_string(),
            });
        }

        let parent = self.config.get_or_insert(superstate.clone());
        if !parent.substates.contains(&self.state) {
            parent.substates.push(self.state.clone());
        }
        if let Some(rep) = self.config.get_mut(&self.state) {
            rep.superstate = Some(superstate);
        }
        Ok(self)
    }

    /// Whether this state appears on the superstate chain of `candidate`.
    fn is_ancestor_of(&self, candidate: &S) -> bool {
        let mut current = self.config.get(candidate).and_then(|r| r.superstate());
        while let Some(ancestor) = current {
            if *ancestor == self.state {
                return true;
            }
            current = self.config.get(ancestor).and_then(|r| r.superstate());
        }
        false
    }

    fn behaviour(self, behaviour: TriggerBehaviour<S, T>) -> Self {
        self.config.get_or_insert(self.state.clone()).push_behaviour(behaviour);
        self
    }

    fn action(self, kind: ActionKind, action: ActionBehaviour<T>) -> Self {
        self.config
            .get_or_insert(self.state.clone())
            .push_action(kind, action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ConfigurationBuilder;
    use crate::core::GuardCondition;

    #[test]
    fn permit_to_self_is_rejected() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        let result = builder.configure("A").permit("Go", "A");

        assert!(matches!(result, Err(BuildError::SelfTransition { .. })));
    }

    #[test]
    fn permit_records_transitioning_behaviour() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        builder
            .configure("A")
            .permit_if("Go", "B", GuardCondition::new("isReady", || true))
            .unwrap();
        let config = builder.build();

        let rep = config.get(&"A").unwrap();
        let behaviour = &rep.trigger_behaviours()[&"Go"][0];
        assert!(matches!(
            behaviour,
            TriggerBehaviour::Transitioning {
                destination: "B",
                ..
            }
        ));
        assert_eq!(behaviour.guard().conditions()[0].description(), "isReady");
        // Destinations are not registered implicitly.
        assert!(!config.contains(&"B"));
    }

    #[test]
    fn every_behaviour_kind_is_recorded() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        builder
            .configure("A")
            .ignore("i")
            .permit_reentry("r")
            .internal_transition("n")
            .permit_dynamic("d", || "B");
        let config = builder.build();

        let rep = config.get(&"A").unwrap();
        assert_eq!(rep.behaviours().count(), 4);
        assert!(matches!(
            rep.trigger_behaviours()[&"r"][0],
            TriggerBehaviour::Reentry {
                destination: "A",
                ..
            }
        ));
    }

    #[test]
    fn actions_are_recorded_in_order() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        builder
            .configure("A")
            .on_entry("first")
            .on_entry_from("Go", "second")
            .on_exit("leave")
            .on_activate("up")
            .on_deactivate("down");
        let config = builder.build();

        let rep = config.get(&"A").unwrap();
        assert_eq!(rep.entry_actions().len(), 2);
        assert!(rep.entry_actions()[0].is_unconditional());
        assert!(rep.entry_actions()[1].is_conditioned_on(&"Go"));
        assert_eq!(rep.exit_actions()[0].description, "leave");
        assert_eq!(rep.activate_actions()[0].description, "up");
        assert_eq!(rep.deactivate_actions()[0].description, "down");
    }

    #[test]
    fn substate_of_links_both_sides() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        builder.configure("Child").substate_of("Parent").unwrap();
        builder.configure("Child").substate_of("Parent").unwrap();
        let config = builder.build();

        assert_eq!(config.get(&"Child").unwrap().superstate(), Some(&"Parent"));
        assert_eq!(config.get(&"Parent").unwrap().substates(), &["Child"]);
    }

    #[test]
    fn substate_of_self_is_rejected() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        let result = builder.configure("A").substate_of("A");

        assert!(matches!(result, Err(BuildError::SelfSuperstate { .. })));
    }

    #[test]
    fn second_superstate_is_rejected() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        builder.configure("A").substate_of("P").unwrap();
        let result = builder.configure("A").substate_of("Q");

        assert_eq!(
            result.err(),
            Some(BuildError::AlreadySubstate {
                state: "A".to_string(),
                existing: "P".to_string(),
                requested: "Q".to_string(),
            })
        );
    }

    #[test]
    fn cycles_are_rejected() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        builder.configure("B").substate_of("A").unwrap();
        builder.configure("C").substate_of("B").unwrap();
        let result = builder.configure("A").substate_of("C");

        assert!(matches!(result, Err(BuildError::CircularHierarchy { .. })));
    }
}
