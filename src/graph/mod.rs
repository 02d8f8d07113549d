//! DOT rendering of state machine configurations.
//!
//! Output layout:
//! - a `digraph` header (compound, record node shape, left-to-right)
//! - one plain node per standalone state, one `cluster_<id>` subgraph per
//!   superstate with its substates nested inside
//! - one edge per trigger behaviour (dynamic behaviours are omitted)
//! - an `init` point aimed at the current state, when it can be queried
//!
//! Rendering never fails. Missing information (unknown current state,
//! unconfigured destinations, dynamic destinations) only removes detail
//! from the output and is reported through `tracing` at debug level.

mod actions;
mod initial;
mod nodes;
mod options;
mod render;
mod transitions;

pub use actions::{format_actions, LABEL_BREAK};
pub use initial::{from_fn, FnSource, NoState, StateQueryError, StateSource};
pub use options::{OptionsError, RankDir, RenderOptions};
pub use render::{render, GraphRenderer};
pub use transitions::{entry_actions_for, guard_clauses, transition_label};
