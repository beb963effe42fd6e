//! Entity reference extraction

use crate::core::types::NodeId;

/// First id-format substring in the normalized text, if any
///
/// Existence in the registry is deliberately not checked here; the
/// executor resolves the reference when the intent runs.
pub fn extract_target(lowered: &str) -> Option<NodeId> {
    NodeId::find_in(lowered)
}
