//! Entry, exit, activate and deactivate actions.

use super::state::Trigger;

/// Which lifecycle hook an action is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Entry,
    Exit,
    Activate,
    Deactivate,
}

/// An action declared on a state.
///
/// Only the description is kept; the action body belongs to the engine.
/// An action with no trigger runs unconditionally, otherwise it only runs
/// when that trigger caused the entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionBehaviour<T: Trigger> {
    pub trigger: Option<T>,
    pub description: String,
}

impl<T: Trigger> ActionBehaviour<T> {
    /// An action that fires regardless of the trigger.
    pub fn unconditional(description: impl Into<String>) -> Self {
        ActionBehaviour {
            trigger: None,
            description: description.into(),
        }
    }

    /// An action that fires only for `trigger`.
    pub fn from_trigger(trigger: T, description: impl Into<String>) -> Self {
        ActionBehaviour {
            trigger: Some(trigger),
            description: description.into(),
        }
    }

    pub fn is_unconditional(&self) -> bool {
        self.trigger.is_none()
    }

    /// True only for an action conditioned on exactly this trigger.
    pub fn is_conditioned_on(&self, trigger: &T) -> bool {
        self.trigger.as_ref() == Some(trigger)
    }
}
