//! Top-level rendering.

use crate::core::{Configuration, State, Trigger};
use crate::graph::initial::{write_initial, StateSource};
use crate::graph::nodes::write_nodes;
use crate::graph::options::RenderOptions;
use crate::graph::transitions::write_transitions;
use std::fmt::Write as _;
use tracing::trace;

/// Renders configurations as DOT text.
///
/// The renderer holds only options; every call is a pure function of the
/// configuration and whatever the state source reports.
#[derive(Clone, Debug, Default)]
pub struct GraphRenderer {
    options: RenderOptions,
}

impl GraphRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render nodes and clusters, then edges, then the initial pointer.
    pub fn render<S, T>(&self, config: &Configuration<S, T>, source: &impl StateSource<S>) -> String
    where
        S: State,
        T: Trigger,
    {
        let mut out = String::new();
        self.write_header(&mut out);

        write_nodes(&mut out, config);
        for rep in config.iter() {
            write_transitions(&mut out, config, rep);
        }
        if self.options.show_initial {
            write_initial(&mut out, source);
        }

        out.push_str("\n}");
        trace!(states = config.len(), bytes = out.len(), "rendered state graph");
        out
    }

    fn write_header(&self, out: &mut String) {
        out.push_str("digraph {\n");
        let _ = writeln!(out, "\tcompound={};", self.options.compound);
        let _ = writeln!(out, "\tnode [shape={}];", self.options.node_shape);
        let _ = writeln!(out, "\trankdir=\"{}\";", self.options.rank_dir.as_str());
        out.push('\n');
    }
}

/// Render with default options.
///
/// # Example
///
/// ```rust
/// use statechart_dot::builder::ConfigurationBuilder;
/// use statechart_dot::graph::render;
///
/// let mut builder = ConfigurationBuilder::new();
/// builder.configure("A").permit("Go", "B").unwrap();
/// builder.configure("B");
///
/// let dot = render(&builder.build(), &Some("A"));
///
/// assert!(dot.contains("A -> B [style=\"solid\", label=\"Go\"];"));
/// assert!(dot.contains("init -> A"));
/// ```
pub fn render<S, T>(config: &Configuration<S, T>, source: &impl StateSource<S>) -> String
where
    S: State,
    T: Trigger,
{
    GraphRenderer::default().render(config, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::options::RankDir;
    use crate::graph::NoState;

    #[test]
    fn empty_configuration_renders_empty_graph() {
        let config = Configuration::<&str, &str>::new();

        assert_eq!(
            render(&config, &NoState),
            "digraph {\n\tcompound=true;\n\tnode [shape=Mrecord];\n\trankdir=\"LR\";\n\n\n}"
        );
    }

    #[test]
    fn custom_options_change_header() {
        let renderer = GraphRenderer::new(RenderOptions {
            node_shape: "record".to_string(),
            rank_dir: RankDir::TopToBottom,
            compound: false,
            show_initial: false,
        });
        let config = Configuration::<&str, &str>::new();

        let dot = renderer.render(&config, &Some("A"));
        assert!(dot.starts_with(
            "digraph {\n\tcompound=false;\n\tnode [shape=record];\n\trankdir=\"TB\";\n\n"
        ));
        assert!(!dot.contains("init"));
    }
}
