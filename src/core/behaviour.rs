//! Trigger behaviours: what firing a trigger does in a given state.

use super::guard::TransitionGuard;
use super::state::{State, Trigger};
use std::fmt;
use std::sync::Arc;

/// Closure computing a destination at fire time.
///
/// Wrapped so behaviours stay `Clone` and `Debug`. Rendering never calls it.
#[derive(Clone)]
pub struct DestinationSelector<S: State>(Arc<dyn Fn() -> S + Send + Sync>);

impl<S: State> DestinationSelector<S> {
    pub fn new<F>(selector: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        DestinationSelector(Arc::new(selector))
    }

    /// Resolve the destination. Engine-side only.
    pub fn select(&self) -> S {
        (self.0)()
    }
}

impl<S: State> fmt::Debug for DestinationSelector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DestinationSelector(..)")
    }
}

/// The declared effect of a trigger while in a state.
///
/// The set of variants is closed; consumers match exhaustively so that a new
/// variant fails to compile until every consumer handles it.
#[derive(Clone, Debug)]
pub enum TriggerBehaviour<S: State, T: Trigger> {
    /// The trigger is accepted and nothing happens.
    Ignored { trigger: T, guard: TransitionGuard },

    /// Exit and re-enter the same state.
    Reentry {
        trigger: T,
        destination: S,
        guard: TransitionGuard,
    },

    /// Run trigger-conditioned entry actions without leaving the state.
    Internal { trigger: T, guard: TransitionGuard },

    /// Move to a different, statically known state.
    Transitioning {
        trigger: T,
        destination: S,
        guard: TransitionGuard,
    },

    /// Destination is computed when the trigger fires.
    Dynamic {
        trigger: T,
        selector: DestinationSelector<S>,
        guard: TransitionGuard,
    },
}

impl<S: State, T: Trigger> TriggerBehaviour<S, T> {
    pub fn trigger(&self) -> &T {
        match self {
            Self::Ignored { trigger, .. }
            | Self::Reentry { trigger, .. }
            | Self::Internal { trigger, .. }
            | Self::Transitioning { trigger, .. }
            | Self::Dynamic { trigger, .. } => trigger,
        }
    }

    pub fn guard(&self) -> &TransitionGuard {
        match self {
            Self::Ignored { guard, .. }
            | Self::Reentry { guard, .. }
            | Self::Internal { guard, .. }
            | Self::Transitioning { guard, .. }
            | Self::Dynamic { guard, .. } => guard,
        }
    }

    /// Statically known destination, if the variant has one.
    pub fn destination(&self) -> Option<&S> {
        match self {
            Self::Reentry { destination, .. } | Self::Transitioning { destination, .. } => {
                Some(destination)
            }
            Self::Ignored { .. } | Self::Internal { .. } | Self::Dynamic { .. } => None,
        }
    }
}
