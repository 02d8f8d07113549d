//! Builder for constructing configurations.

use crate::builder::state::StateConfigurer;
use crate::core::{Configuration, State, Trigger};

/// Builder for assembling a [`Configuration`] state by state.
///
/// States are registered the first time they are configured or named as a
/// superstate, and that order becomes the render order.
pub struct ConfigurationBuilder<S: State, T: Trigger> {
    config: Configuration<S, T>,
}

impl<S: State, T: Trigger> ConfigurationBuilder<S, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: Configuration::new(),
        }
    }

    /// Start (or continue) declaring `state`.
    pub fn configure(&mut self, state: S) -> StateConfigurer<'_, S, T> {
        StateConfigurer::new(&mut self.config, state)
    }

    /// Inspect the configuration built so far.
    pub fn configuration(&self) -> &Configuration<S, T> {
        &self.config
    }

    /// Finish building.
    pub fn build(self) -> Configuration<S, T> {
        self.config
    }
}

impl<S: State, T: Trigger> Default for ConfigurationBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
