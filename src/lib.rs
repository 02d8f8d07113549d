//! statechart-dot: render hierarchical state machine configurations as DOT.
//!
//! A configuration describes states, their nesting, entry/exit/activate/
//! deactivate actions and the trigger behaviours that move between them.
//! The renderer turns that static description into Graphviz text without
//! running the machine.
//!
//! # Core Concepts
//!
//! - **Configuration**: ordered arena of state representations ([`core`])
//! - **Builder**: fluent declaration of states and behaviours ([`builder`])
//! - **Graph**: the pure renderer and its options ([`graph`])
//!
//! # Example
//!
//! ```rust
//! use statechart_dot::builder::{BuildError, ConfigurationBuilder};
//! use statechart_dot::core::GuardCondition;
//! use statechart_dot::graph::render;
//!
//! # fn main() -> Result<(), BuildError> {
//! let mut builder = ConfigurationBuilder::new();
//! builder
//!     .configure("Idle")
//!     .permit("Start", "Running")?
//!     .ignore_if("Ping", GuardCondition::new("isAwake", || true));
//! builder
//!     .configure("Running")
//!     .on_entry_from("Start", "spin up")
//!     .permit("Stop", "Idle")?;
//!
//! let dot = render(&builder.build(), &Some("Idle"));
//!
//! assert!(dot.contains("Idle -> Running [style=\"solid\", label=\"Start / spin up\"];"));
//! assert!(dot.contains("Idle -> Idle [style=\"solid\", label=\"Ping [isAwake]\"];"));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod graph;

// Re-export commonly used types
pub use crate::builder::{BuildError, ConfigurationBuilder};
pub use crate::core::{Configuration, State, Trigger, TriggerBehaviour};
pub use crate::graph::{render, GraphRenderer, RenderOptions, StateSource};
