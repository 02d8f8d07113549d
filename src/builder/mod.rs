//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and macros for declaring state
//! machine configurations: states, hierarchy, actions and trigger
//! behaviours.

pub mod configuration;
pub mod error;
pub mod macros;
pub mod state;

pub use configuration::ConfigurationBuilder;
pub use error::BuildError;
pub use state::StateConfigurer;
