//! Per-state configuration node.

use super::action::{ActionBehaviour, ActionKind};
use super::behaviour::TriggerBehaviour;
use super::state::{State, Trigger};
use indexmap::IndexMap;

/// Everything declared about one state.
///
/// The superstate is stored as a key into the owning
/// [`Configuration`](super::Configuration), never as a reference, and
/// substates are an ordered list of keys resolved through the same arena.
#[derive(Clone, Debug)]
pub struct StateRepresentation<S: State, T: Trigger> {
    pub(crate) state: S,
    pub(crate) superstate: Option<S>,
    pub(crate) substates: Vec<S>,
    pub(crate) entry_actions: Vec<ActionBehaviour<T>>,
    pub(crate) exit_actions: Vec<ActionBehaviour<T>>,
    pub(crate) activate_actions: Vec<ActionBehaviour<T>>,
    pub(crate) deactivate_actions: Vec<ActionBehaviour<T>>,
    pub(crate) trigger_behaviours: IndexMap<T, Vec<TriggerBehaviour<S, T>>>,
}

impl<S: State, T: Trigger> StateRepresentation<S, T> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            superstate: None,
            substates: Vec::new(),
            entry_actions: Vec::new(),
            exit_actions: Vec::new(),
            activate_actions: Vec::new(),
            deactivate_actions: Vec::new(),
            trigger_behaviours: IndexMap::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn superstate(&self) -> Option<&S> {
        self.superstate.as_ref()
    }

    pub fn substates(&self) -> &[S] {
        &self.substates
    }

    /// A top-level state that owns substates.
    pub fn is_cluster_root(&self) -> bool {
        self.superstate.is_none() && !self.substates.is_empty()
    }

    pub fn actions(&self, kind: ActionKind) -> &[ActionBehaviour<T>] {
        match kind {
            ActionKind::Entry => &self.entry_actions,
            ActionKind::Exit => &self.exit_actions,
            ActionKind::Activate => &self.activate_actions,
            ActionKind::Deactivate => &self.deactivate_actions,
        }
    }

    pub fn entry_actions(&self) -> &[ActionBehaviour<T>] {
        &self.entry_actions
    }

    pub fn exit_actions(&self) -> &[ActionBehaviour<T>] {
        &self.exit_actions
    }

    pub fn activate_actions(&self) -> &[ActionBehaviour<T>] {
        &self.activate_actions
    }

    pub fn deactivate_actions(&self) -> &[ActionBehaviour<T>] {
        &self.deactivate_actions
    }

    /// Trigger behaviours grouped by trigger, in declaration order.
    pub fn trigger_behaviours(&self) -> &IndexMap<T, Vec<TriggerBehaviour<S, T>>> {
        &self.trigger_behaviours
    }

    /// Every behaviour, flattened in declaration order.
    pub fn behaviours(&self) -> impl Iterator<Item = &TriggerBehaviour<S, T>> {
        self.trigger_behaviours.values().flatten()
    }

    pub(crate) fn push_action(&mut self, kind: ActionKind, action: ActionBehaviour<T>) {
        match kind {
            ActionKind::Entry => self.entry_actions.push(action),
            ActionKind::Exit => self.exit_actions.push(action),
            ActionKind::Activate => self.activate_actions.push(action),
            ActionKind::Deactivate => self.deactivate_actions.push(action),
        }
    }

    pub(crate) fn push_behaviour(&mut self, behaviour: TriggerBehaviour<S, T>) {
        self.trigger_behaviours
            .entry(behaviour.trigger().clone())
            .or_default()
            .push(behaviour);
    }
}
