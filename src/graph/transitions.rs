//! Transition edge emission.
//!
//! Each trigger behaviour maps to exactly one edge, except dynamic
//! behaviours whose destination cannot be known without running the engine;
//! those are skipped.

use crate::core::{
    ActionBehaviour, Configuration, GuardCondition, State, StateRepresentation, TransitionGuard,
    Trigger, TriggerBehaviour,
};
use std::fmt::Write as _;
use tracing::debug;

/// Write one edge per renderable behaviour of `rep`, in declaration order.
pub(crate) fn write_transitions<S: State, T: Trigger>(
    out: &mut String,
    config: &Configuration<S, T>,
    rep: &StateRepresentation<S, T>,
) {
    let source = rep.state();
    for behaviour in rep.behaviours() {
        match behaviour {
            TriggerBehaviour::Ignored { trigger, guard } => {
                write_transition(out, source, source, trigger, &[], guard);
            }
            TriggerBehaviour::Reentry {
                trigger,
                destination,
                guard,
            } => {
                let actions = entry_actions_for(rep.entry_actions(), trigger);
                write_transition(out, source, destination, trigger, &actions, guard);
            }
            TriggerBehaviour::Internal { trigger, guard } => {
                let actions = entry_actions_for(rep.entry_actions(), trigger);
                write_transition(out, source, source, trigger, &actions, guard);
            }
            TriggerBehaviour::Transitioning {
                trigger,
                destination,
                guard,
            } => {
                let actions = match config.get(destination) {
                    Some(dest) => entry_actions_for(dest.entry_actions(), trigger),
                    None => {
                        debug!(
                            source = source.name(),
                            destination = destination.name(),
                            "transition destination is not configured"
                        );
                        Vec::new()
                    }
                };
                write_transition(out, source, destination, trigger, &actions, guard);
            }
            TriggerBehaviour::Dynamic { trigger, .. } => {
                debug!(
                    source = source.name(),
                    trigger = trigger.name(),
                    "skipping dynamic transition"
                );
            }
        }
    }
}

/// Descriptions of entry actions conditioned on `trigger`.
pub fn entry_actions_for<'a, T: Trigger>(
    actions: &'a [ActionBehaviour<T>],
    trigger: &T,
) -> Vec<&'a str> {
    actions
        .iter()
        .filter(|a| a.is_conditioned_on(trigger))
        .map(|a| a.description.as_str())
        .collect()
}

/// One `[<description>]` clause per condition, in declaration order.
pub fn guard_clauses(guard: &TransitionGuard) -> impl Iterator<Item = String> + '_ {
    guard
        .conditions()
        .iter()
        .map(GuardCondition::description)
        .map(|d| format!("[{d}]"))
}

/// Edge label: trigger, optional ` / actions`, then guard clauses.
pub fn transition_label<T: Trigger>(
    trigger: &T,
    actions: &[&str],
    guard: &TransitionGuard,
) -> String {
    let mut label = trigger.name().to_string();
    if !actions.is_empty() {
        label.push_str(" / ");
        label.push_str(&actions.join(", "));
    }
    for clause in guard_clauses(guard) {
        label.push(' ');
        label.push_str(&clause);
    }
    label
}

fn write_transition<S: State, T: Trigger>(
    out: &mut String,
    source: &S,
    destination: &S,
    trigger: &T,
    actions: &[&str],
    guard: &TransitionGuard,
) {
    let _ = write!(
        out,
        "\n{} -> {} [style=\"solid\", label=\"{}\"];",
        source.name(),
        destination.name(),
        transition_label(trigger, actions, guard)
    );
}
