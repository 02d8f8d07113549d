//! Action label formatting for nodes and clusters.

use crate::core::{State, StateRepresentation, Trigger};

/// In-field line break understood by DOT record labels.
pub const LABEL_BREAK: &str = "\\n";

/// Build the action field of a node or cluster label.
///
/// Order is activate, deactivate, unconditional entry, exit. Entry actions
/// conditioned on a trigger are left to the edges that carry that trigger.
/// Returns an empty string when there is nothing to show.
pub fn format_actions<S: State, T: Trigger>(rep: &StateRepresentation<S, T>) -> String {
    let activated = rep
        .activate_actions()
        .iter()
        .map(|a| format!("activated / {}", a.description));
    let deactivated = rep
        .deactivate_actions()
        .iter()
        .map(|a| format!("deactivated / {}", a.description));
    let entry = rep
        .entry_actions()
        .iter()
        .filter(|a| a.is_unconditional())
        .map(|a| format!("entry / {}", a.description));
    let exit = rep
        .exit_actions()
        .iter()
        .map(|a| format!("exit / {}", a.description));

    activated
        .chain(deactivated)
        .chain(entry)
        .chain(exit)
        .collect::<Vec<_>>()
        .join(LABEL_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ConfigurationBuilder;

    #[test]
    fn no_actions_yields_empty_label() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        builder.configure("A");
        let config = builder.build();

        assert_eq!(format_actions(config.get(&"A").unwrap()), "");
    }

    #[test]
    fn actions_follow_fixed_order() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        builder
            .configure("A")
            .on_exit("x")
            .on_entry("e")
            .on_deactivate("d")
            .on_activate("a");
        let config = builder.build();

        assert_eq!(
            format_actions(config.get(&"A").unwrap()),
            "activated / a\\ndeactivated / d\\nentry / e\\nexit / x"
        );
    }

    #[test]
    fn trigger_conditioned_entry_actions_are_excluded() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        builder
            .configure("A")
            .on_entry_from("Go", "greet")
            .on_entry("always");
        let config = builder.build();

        assert_eq!(format_actions(config.get(&"A").unwrap()), "entry / always");
    }

    #[test]
    fn break_marker_is_an_escape_not_a_newline() {
        let mut builder = ConfigurationBuilder::<&str, &str>::new();
        builder.configure("A").on_exit("one").on_exit("two");
        let config = builder.build();

        let label = format_actions(config.get(&"A").unwrap());
        assert!(!label.contains('\n'));
        assert_eq!(label, r"exit / one\nexit / two");
    }
}
