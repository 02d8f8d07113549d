//! Guard conditions attached to trigger behaviours.
//!
//! A guard is an ordered list of named conditions that must all hold for a
//! trigger behaviour to be eligible. Rendering only ever reads the
//! descriptions; evaluation is left to whatever engine owns the configuration.

use std::fmt;
use std::sync::Arc;

type Predicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// A single named predicate.
///
/// # Example
///
/// ```rust
/// use statechart_dot::core::GuardCondition;
///
/// let ready = GuardCondition::new("isReady", || true);
///
/// assert_eq!(ready.description(), "isReady");
/// assert!(ready.check());
/// ```
#[derive(Clone)]
pub struct GuardCondition {
    predicate: Predicate,
    description: String,
}

impl GuardCondition {
    /// Create a condition from a description and a pure predicate.
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        GuardCondition {
            predicate: Arc::new(predicate),
            description: description.into(),
        }
    }

    /// Human-readable description used in edge labels.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for GuardCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardCondition")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Conjunction of guard conditions, in declaration order.
///
/// An empty guard always holds and renders no bracket clause.
#[derive(Clone, Debug, Default)]
pub struct TransitionGuard {
    conditions: Vec<GuardCondition>,
}

impl TransitionGuard {
    /// A guard with no conditions.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a guard from conditions, keeping their order.
    pub fn new(conditions: Vec<GuardCondition>) -> Self {
        TransitionGuard { conditions }
    }

    /// Append a condition.
    pub fn and(mut self, condition: GuardCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn conditions(&self) -> &[GuardCondition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Check whether every condition holds (logical AND).
    pub fn is_met(&self) -> bool {
        self.conditions.iter().all(GuardCondition::check)
    }
}

impl From<GuardCondition> for TransitionGuard {
    fn from(condition: GuardCondition) -> Self {
        TransitionGuard::new(vec![condition])
    }
}

impl From<Vec<GuardCondition>> for TransitionGuard {
    fn from(conditions: Vec<GuardCondition>) -> Self {
        TransitionGuard::new(conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_guard_is_always_met() {
        let guard = TransitionGuard::none();

        assert!(guard.is_empty());
        assert!(guard.is_met());
    }

    #[test]
    fn guard_requires_all_conditions() {
        let guard = TransitionGuard::none()
            .and(GuardCondition::new("first", || true))
            .and(GuardCondition::new("second", || false));

        assert!(!guard.is_met());
    }

    #[test]
    fn guard_preserves_declaration_order() {
        let guard = TransitionGuard::new(vec![
            GuardCondition::new("b", || true),
            GuardCondition::new("a", || true),
        ]);

        let descriptions: Vec<&str> = guard
            .conditions()
            .iter()
            .map(GuardCondition::description)
            .collect();
        assert_eq!(descriptions, vec!["b", "a"]);
    }

    #[test]
    fn condition_is_deterministic() {
        let condition = GuardCondition::new("stable", || 2 + 2 == 4);

        assert_eq!(condition.check(), condition.check());
    }

    #[test]
    fn debug_output_omits_predicate() {
        let condition = GuardCondition::new("isReady", || true);
        let debug = format!("{condition:?}");

        assert!(debug.contains("isReady"));
    }
}
