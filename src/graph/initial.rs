//! Initial-state pointer and the seam for querying the engine.

use crate::core::State;
use std::fmt::Write as _;
use thiserror::Error;
use tracing::debug;

/// Errors reported when asking for the current state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateQueryError {
    #[error("State machine has not been initialized")]
    NotInitialized,

    #[error("Current state unavailable: {0}")]
    Unavailable(String),
}

/// Best-effort access to a machine's current state.
///
/// Rendering treats a failed query as "no initial pointer", never as an
/// error.
pub trait StateSource<S: State> {
    fn current_state(&self) -> Result<S, StateQueryError>;
}

impl<S: State> StateSource<S> for Option<S> {
    fn current_state(&self) -> Result<S, StateQueryError> {
        self.clone().ok_or(StateQueryError::NotInitialized)
    }
}

impl<S: State> StateSource<S> for Result<S, StateQueryError> {
    fn current_state(&self) -> Result<S, StateQueryError> {
        self.clone()
    }
}

impl<S: State, Q: StateSource<S> + ?Sized> StateSource<S> for &Q {
    fn current_state(&self) -> Result<S, StateQueryError> {
        (**self).current_state()
    }
}

/// A source that never knows the current state.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoState;

impl<S: State> StateSource<S> for NoState {
    fn current_state(&self) -> Result<S, StateQueryError> {
        Err(StateQueryError::NotInitialized)
    }
}

/// A source backed by a closure.
#[derive(Clone)]
pub struct FnSource<F>(F);

/// Wrap a closure as a [`StateSource`].
///
/// # Example
///
/// ```rust
/// use statechart_dot::graph::{from_fn, StateSource};
///
/// let source = from_fn(|| Ok("Idle"));
///
/// assert_eq!(source.current_state(), Ok("Idle"));
/// ```
pub fn from_fn<S, F>(query: F) -> FnSource<F>
where
    S: State,
    F: Fn() -> Result<S, StateQueryError>,
{
    FnSource(query)
}

impl<S, F> StateSource<S> for FnSource<F>
where
    S: State,
    F: Fn() -> Result<S, StateQueryError>,
{
    fn current_state(&self) -> Result<S, StateQueryError> {
        (self.0)()
    }
}

/// Write the `init` point and its edge, or nothing if the query fails.
pub(crate) fn write_initial<S: State>(out: &mut String, source: &impl StateSource<S>) {
    match source.current_state() {
        Ok(state) => {
            out.push_str("\n init [label=\"\", shape=point];");
            let _ = write!(out, "\n init -> {}[style = \"solid\"]", state.name());
        }
        Err(err) => {
            debug!(error = %err, "omitting initial state pointer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_state_writes_pointer() {
        let mut out = String::new();
        write_initial(&mut out, &Some("A"));

        assert_eq!(
            out,
            "\n init [label=\"\", shape=point];\n init -> A[style = \"solid\"]"
        );
    }

    #[test]
    fn failed_query_writes_nothing() {
        let mut out = String::new();
        write_initial::<&str>(&mut out, &NoState);
        write_initial(&mut out, &None::<&str>);
        write_initial(
            &mut out,
            &Err::<&str, _>(StateQueryError::Unavailable("busy".to_string())),
        );

        assert!(out.is_empty());
    }

    #[test]
    fn closure_source_is_queried() {
        let source = from_fn(|| Ok::<_, StateQueryError>("Ready"));

        assert_eq!(source.current_state(), Ok("Ready"));
        assert_eq!((&source).current_state(), Ok("Ready"));
    }

    #[test]
    fn query_errors_display() {
        assert_eq!(
            StateQueryError::NotInitialized.to_string(),
            "State machine has not been initialized"
        );
        assert_eq!(
            StateQueryError::Unavailable("locked".to_string()).to_string(),
            "Current state unavailable: locked"
        );
    }
}
