//! Intent classification
//!
//! Deterministic, rule-based keyword matching over the normalized text.
//! Two ordered phases: interaction rules run before creation rules so a
//! command like "toggle node-ab12" is never misread as creation merely
//! because "toggle" also appears in the status creation keywords. Within
//! a phase the first matching group wins. The tables below are the entire
//! behavior of the classifier; there is no scoring.

use serde::{Deserialize, Serialize};

use crate::core::types::NodeId;

/// Classified meaning of one command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentKind {
    /// Create a plain element
    CreateBase,
    /// Create a metric display
    CreateMetric,
    /// Create a data view
    CreateData,
    /// Create a status indicator
    CreateStatus,
    /// Flip a status indicator
    InteractToggle,
    /// Append to a data view
    InteractAppend,
    /// Set a metric value
    InteractNumeric,
    /// Could not determine intent
    Unknown,
}

/// A classified command with its extracted payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub kind: IntentKind,
    /// Target reference found in the text; existence is checked at
    /// execution time
    pub target: Option<NodeId>,
    /// Human-readable label extracted independently of the kind
    pub label: String,
}

/// Markers that explicitly flag an interaction with an existing element
const INTERACT_MARKERS: &[&str] = &["toggle", "switch", "set node", "update node"];

/// Markers that flag an append interaction
const APPEND_MARKERS: &[&str] = &["add item", "add to", "log", "append"];

/// Interaction groups in precedence order; the first match wins
const INTERACTION_RULES: &[(&[&str], IntentKind)] = &[
    (&["toggle", "switch"], IntentKind::InteractToggle),
    (
        &["append", "item", "put", "insert", "log", "add to"],
        IntentKind::InteractAppend,
    ),
    (
        &["update", "set", "push", "change"],
        IntentKind::InteractNumeric,
    ),
];

/// Verbs that open the creation phase
const CREATION_VERBS: &[&str] = &["add", "new", "create", "make"];

/// Topical creation groups in precedence order; no match falls back to Base
const CREATION_RULES: &[(&[&str], IntentKind)] = &[
    (&["progress", "bar", "percent"], IntentKind::CreateMetric),
    (&["data", "list", "view", "logs"], IntentKind::CreateData),
    (
        &["status", "indicator", "light", "toggle"],
        IntentKind::CreateStatus,
    ),
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Classify normalized text given whether a target reference was found
///
/// Pure function of its inputs: identical input always yields the
/// identical kind.
pub fn classify(lowered: &str, has_target: bool) -> IntentKind {
    // Phase 1: interaction, gated on a concrete target reference
    if has_target
        && (contains_any(lowered, INTERACT_MARKERS)
            || contains_any(lowered, APPEND_MARKERS)
            || lowered.contains(NodeId::PREFIX))
    {
        for (keywords, kind) in INTERACTION_RULES {
            if contains_any(lowered, keywords) {
                return *kind;
            }
        }
        // Target present but no interaction group matched: fall through
        // to the creation phase like any other unresolved text.
    }

    // Phase 2: creation, only reached while still unresolved
    if contains_any(lowered, CREATION_VERBS) {
        for (keywords, kind) in CREATION_RULES {
            if contains_any(lowered, keywords) {
                return *kind;
            }
        }
        return IntentKind::CreateBase;
    }

    IntentKind::Unknown
}
