//! Engine-wide layout defaults.
//!
//! A `MetricsResolver` may override any of these per section; whatever it
//! leaves unset falls back to the values here.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::mode::LayoutMode;
use crate::primitives::EdgeInsets;

/// Configuration shared by every section of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowDefaults {
    /// Flow strategy used by the next recompute.
    pub mode: LayoutMode,

    /// Insets applied around every section.
    pub section_inset: EdgeInsets,

    /// Spacing between neighbouring items on one line.
    pub minimum_interitem_spacing: f32,

    /// Spacing between consecutive lines (rows or columns).
    pub minimum_line_spacing: f32,
}

impl Default for FlowDefaults {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Vertical,
            section_inset: EdgeInsets::ZERO,
            minimum_interitem_spacing: 10.0,
            minimum_line_spacing: 10.0,
        }
    }
}

impl FlowDefaults {
    /// Parse defaults from a JSON document. Missing fields keep their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the flow strategy.
    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the default section insets.
    pub fn with_section_inset(mut self, inset: EdgeInsets) -> Self {
        self.section_inset = inset;
        self
    }

    /// Set the default spacing between items on a line.
    pub fn with_interitem_spacing(mut self, spacing: f32) -> Self {
        self.minimum_interitem_spacing = spacing;
        self
    }

    /// Set the default spacing between lines.
    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.minimum_line_spacing = spacing;
        self
    }
}
