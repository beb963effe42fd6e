//! Notifications consumed by the presentation layer
//!
//! The interpreter never renders anything; it emits one log event per
//! command plus state-change notifications carrying read-only element
//! snapshots.

use serde::{Deserialize, Serialize};

use crate::core::types::NodeId;
use crate::entity::element::Element;

/// Severity of a user-visible log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

/// One user-visible log line per processed command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub text: String,
    pub level: LogLevel,
}

impl LogEvent {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: LogLevel::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: LogLevel::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: LogLevel::Error,
        }
    }
}

/// State-change notifications for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    /// A new element entered the registry
    ElementCreated { element: Element },
    /// An existing element mutated in place
    ElementUpdated { id: NodeId, element: Element },
    /// Transient visual cue after a successful interaction; no state
    /// effect
    Pulse { id: NodeId },
}
