//! Identifier traits for states and triggers.
//!
//! States and triggers are opaque, caller-defined values. The renderer only
//! needs to compare them and print them, so both traits reduce to equality,
//! hashing (for the configuration arena) and a textual name.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine state identifiers.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into edges and lookups
/// - `Eq` + `Hash`: identifiers key the configuration arena
/// - `Debug`: identifiers must be debuggable for diagnostics
/// - `Send` + `Sync`: configurations may be rendered from several threads
///
/// # Example
///
/// ```rust
/// use statechart_dot::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Phone {
///     OffHook,
///     Ringing,
/// }
///
/// impl State for Phone {
///     fn name(&self) -> &str {
///         match self {
///             Self::OffHook => "OffHook",
///             Self::Ringing => "Ringing",
///         }
///     }
/// }
///
/// assert_eq!(Phone::Ringing.name(), "Ringing");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name as it appears in rendered output.
    ///
    /// The name doubles as the DOT node identifier, so it should be unique
    /// within a configuration.
    fn name(&self) -> &str;
}

/// Trait for trigger identifiers.
///
/// Mirrors [`State`]: triggers label edges and select trigger-conditioned
/// entry actions, so they need equality and a name.
pub trait Trigger: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the trigger's name as it appears in edge labels.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl Trigger for String {
    fn name(&self) -> &str {
        self
    }
}

impl Trigger for &'static str {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Busy,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
    }

    #[test]
    fn string_identifiers_name_themselves() {
        assert_eq!(State::name(&"Open"), "Open");
        assert_eq!(Trigger::name(&String::from("Close")), "Close");
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Idle, TestState::Idle.clone());
        assert_ne!(TestState::Idle, TestState::Busy);
    }
}
