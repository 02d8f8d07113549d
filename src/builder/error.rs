//! Build errors for the configuration builder.

use thiserror::Error;

/// Errors that can occur while declaring a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State '{state}' cannot permit '{trigger}' to itself. Use .permit_reentry() instead")]
    SelfTransition { state: String, trigger: String },

    #[error("State '{state}' cannot be its own superstate")]
    SelfSuperstate { state: String },

    #[error("Making '{state}' a substate of '{superstate}' would create a cycle")]
    CircularHierarchy { state: String, superstate: String },

    #[error("State '{state}' is already a substate of '{existing}', cannot move it under '{requested}'")]
    AlreadySubstate {
        state: String,
        existing: String,
        requested: String,
    },
}
