//! Node and cluster emission.

use crate::core::{Configuration, State, StateRepresentation, Trigger};
use crate::graph::actions::format_actions;
use std::fmt::Write as _;

/// Literal divider between a cluster's name and its actions.
const CLUSTER_DIVIDER: &str = "\n----------\n";

/// Write every top-level state, as a cluster when it owns substates.
///
/// States with a superstate are written from inside their cluster only.
pub(crate) fn write_nodes<S: State, T: Trigger>(out: &mut String, config: &Configuration<S, T>) {
    for rep in config.top_level() {
        if rep.is_cluster_root() {
            write_cluster(out, config, rep);
        } else {
            write_state(out, rep);
        }
    }
}

/// `\t<id> [label="<id>|<actions>"];`
pub(crate) fn write_state<S: State, T: Trigger>(out: &mut String, rep: &StateRepresentation<S, T>) {
    let name = rep.state().name();
    let _ = write!(out, "\t{name} [label=\"{name}");
    let actions = format_actions(rep);
    if !actions.is_empty() {
        out.push('|');
        out.push_str(&actions);
    }
    out.push_str("\"];\n");
}

/// `subgraph cluster_<id> { ... }` with substates nested inside.
///
/// Every substate, at any depth, is a plain node inside this one cluster.
pub(crate) fn write_cluster<S: State, T: Trigger>(
    out: &mut String,
    config: &Configuration<S, T>,
    rep: &StateRepresentation<S, T>,
) {
    let name = rep.state().name();
    let _ = write!(out, "\nsubgraph cluster_{name} {{\n\tlabel=\"{name}");
    let actions = format_actions(rep);
    if !actions.is_empty() {
        out.push_str(CLUSTER_DIVIDER);
        out.push_str(&actions);
    }
    out.push_str("\";\n");

    write_substates(out, config, rep);
    out.push_str("}\n");
}

/// Depth-first: each substate's node, then its own substates.
fn write_substates<S: State, T: Trigger>(
    out: &mut String,
    config: &Configuration<S, T>,
    rep: &StateRepresentation<S, T>,
) {
    for substate in config.substates_of(rep) {
        write_state(out, substate);
        write_substates(out, config, substate);
    }
}
