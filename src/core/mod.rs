//! Core configuration model for hierarchical state machines.
//!
//! This module contains the read-only data the renderer consumes:
//! - Identifier traits for states and triggers
//! - Actions, guards and the closed set of trigger behaviours
//! - Per-state representations stored in an ordered arena
//!
//! Nothing here evaluates guards or fires triggers; that belongs to the
//! engine that owns the configuration.

mod action;
mod behaviour;
mod configuration;
mod guard;
mod representation;
mod state;

pub use action::{ActionBehaviour, ActionKind};
pub use behaviour::{DestinationSelector, TriggerBehaviour};
pub use configuration::Configuration;
pub use guard::{GuardCondition, TransitionGuard};
pub use representation::StateRepresentation;
pub use state::{State, Trigger};
