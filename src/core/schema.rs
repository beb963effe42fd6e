//! Interpreter schema with documented constraint constants
//!
//! All validation limits are collected here with explanations of their
//! purpose. The schema is compiled-in configuration: it is not adjustable
//! at runtime. The id pattern itself lives structurally in
//! [`crate::core::types::NodeId`].

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Constraint table governing element validation
///
/// These values bound every mutation the executor applies. Inputs outside
/// a bound are clamped or truncated, never rejected.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Inclusive bounds for metric values
    ///
    /// Numeric interactions clamp into this range, so a stored value can
    /// never leave it regardless of input magnitude.
    pub metric_range: (i64, i64),

    /// Maximum retained entries in a data view
    ///
    /// Appends past this limit drop the oldest entries first, so a view
    /// always holds the most recent window.
    pub max_data_items: usize,

    /// Maximum element title length in characters
    ///
    /// Longer titles are truncated at construction.
    pub max_label_length: usize,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            metric_range: (0, 100),
            max_data_items: 50,
            max_label_length: 32,
        }
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a raw numeric input into the metric range
    pub fn clamp_metric(&self, value: i64) -> i64 {
        value.clamp(self.metric_range.0, self.metric_range.1)
    }

    /// Truncate a raw title to the label limit
    pub fn clamp_title(&self, title: &str) -> String {
        title.chars().take(self.max_label_length).collect()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.metric_range.0 > self.metric_range.1 {
            return Err(format!(
                "metric_range lower bound ({}) exceeds upper bound ({})",
                self.metric_range.0, self.metric_range.1
            ));
        }
        if self.max_data_items == 0 {
            return Err("max_data_items must be positive".into());
        }
        if self.max_label_length == 0 {
            return Err("max_label_length must be positive".into());
        }
        Ok(())
    }
}

/// Presentation color tokens shared with the rendering layer
///
/// The interpreter never reads these; elements carry a token so the
/// presentation layer can resolve a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Primary,
    Success,
    Danger,
    Surface,
    Accent,
}

impl ColorToken {
    /// Hex value rendered by the presentation layer
    pub fn hex(self) -> &'static str {
        match self {
            ColorToken::Primary => "#3B82F6",
            ColorToken::Success => "#10B981",
            ColorToken::Danger => "#EF4444",
            ColorToken::Surface => "#1E293B",
            ColorToken::Accent => "#F59E0B",
        }
    }
}

impl Default for ColorToken {
    fn default() -> Self {
        Self::Primary
    }
}

// === GLOBAL SCHEMA ACCESS ===

static SCHEMA: OnceLock<Schema> = OnceLock::new();

/// Get the global schema (initializes with defaults if not set)
pub fn schema() -> &'static Schema {
    SCHEMA.get_or_init(Schema::default)
}
