//! Ordered arena of state representations.

use super::representation::StateRepresentation;
use super::state::{State, Trigger};
use indexmap::IndexMap;

/// Mapping from state identifier to its representation.
///
/// Keys are unique and insertion order is preserved; rendering walks the
/// configuration in that order so output is stable.
#[derive(Clone, Debug)]
pub struct Configuration<S: State, T: Trigger> {
    states: IndexMap<S, StateRepresentation<S, T>>,
}

impl<S: State, T: Trigger> Configuration<S, T> {
    pub fn new() -> Self {
        Self {
            states: IndexMap::new(),
        }
    }

    pub fn get(&self, state: &S) -> Option<&StateRepresentation<S, T>> {
        self.states.get(state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Representations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StateRepresentation<S, T>> {
        self.states.values()
    }

    /// Resolve the substates of `rep` through the arena.
    ///
    /// Substate keys with no representation are skipped.
    pub fn substates_of<'a>(
        &'a self,
        rep: &'a StateRepresentation<S, T>,
    ) -> impl Iterator<Item = &'a StateRepresentation<S, T>> + 'a {
        rep.substates.iter().filter_map(move |s| self.states.get(s))
    }

    /// Representations with no superstate, in insertion order.
    pub fn top_level(&self) -> impl Iterator<Item = &StateRepresentation<S, T>> {
        self.states.values().filter(|rep| rep.superstate.is_none())
    }

    /// Insert a representation, replacing any previous one for the same state.
    pub fn insert(&mut self, rep: StateRepresentation<S, T>) {
        self.states.insert(rep.state.clone(), rep);
    }

    pub(crate) fn get_mut(&mut self, state: &S) -> Option<&mut StateRepresentation<S, T>> {
        self.states.get_mut(state)
    }

    pub(crate) fn get_or_insert(&mut self, state: S) -> &mut StateRepresentation<S, T> {
        self.states
            .entry(state.clone())
            .or_insert_with(|| StateRepresentation::new(state))
    }
}

impl<S: State, T: Trigger> Default for Configuration<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> FromIterator<StateRepresentation<S, T>> for Configuration<S, T> {
    fn from_iter<I: IntoIterator<Item = StateRepresentation<S, T>>>(iter: I) -> Self {
        let mut config = Configuration::new();
        for rep in iter {
            config.insert(rep);
        }
        config
    }
}
