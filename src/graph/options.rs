//! Render options.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Graph layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankDir {
    #[default]
    #[serde(rename = "LR")]
    LeftToRight,
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "RL")]
    RightToLeft,
    #[serde(rename = "BT")]
    BottomToTop,
}

impl RankDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftToRight => "LR",
            Self::TopToBottom => "TB",
            Self::RightToLeft => "RL",
            Self::BottomToTop => "BT",
        }
    }
}

/// Errors loading render options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Invalid render options: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Graph-level settings written into the DOT header.
///
/// The defaults produce the standard header; missing fields in serialized
/// options fall back to them.
///
/// # Example
///
/// ```rust
/// use statechart_dot::graph::{RankDir, RenderOptions};
///
/// let options = RenderOptions::from_json(r#"{ "rank_dir": "TB" }"#).unwrap();
///
/// assert_eq!(options.rank_dir, RankDir::TopToBottom);
/// assert_eq!(options.node_shape, "Mrecord");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Default node shape; must be a record shape for action fields to split.
    pub node_shape: String,
    pub rank_dir: RankDir,
    /// Allow edges to clusters.
    pub compound: bool,
    /// Emit the `init` pointer when the current state is known.
    pub show_initial: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            node_shape: "Mrecord".to_string(),
            rank_dir: RankDir::default(),
            compound: true,
            show_initial: true,
        }
    }
}

impl RenderOptions {
    /// Parse options from JSON.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize options to JSON.
    pub fn to_json(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_header() {
        let options = RenderOptions::default();

        assert_eq!(options.node_shape, "Mrecord");
        assert_eq!(options.rank_dir.as_str(), "LR");
        assert!(options.compound);
        assert!(options.show_initial);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let options = RenderOptions::from_json("{}").unwrap();

        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn json_overrides_fields() {
        let options =
            RenderOptions::from_json(r#"{ "node_shape": "record", "show_initial": false }"#)
                .unwrap();

        assert_eq!(options.node_shape, "record");
        assert!(!options.show_initial);
        assert_eq!(options.rank_dir, RankDir::LeftToRight);
    }

    #[test]
    fn options_serialize_correctly() {
        let options = RenderOptions {
            rank_dir: RankDir::BottomToTop,
            ..RenderOptions::default()
        };
        let json = options.to_json().unwrap();

        assert!(json.contains("\"BT\""));
        assert_eq!(RenderOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = RenderOptions::from_json(r#"{ "rank_dir": "sideways" }"#);

        assert!(matches!(result, Err(OptionsError::Parse(_))));
    }
}
