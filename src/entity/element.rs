//! Canvas element model
//!
//! Elements form a closed set of variants. The capability set of an
//! element is fully determined by its variant at construction and never
//! changes, so capability checks are exhaustive matches rather than
//! runtime list membership tests.

use crate::core::schema::{schema, ColorToken};
use crate::core::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Declared ability of an element, gating which interactions are valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Reserved for the presentation layer; the interpreter never acts on it
    ColorChange,
    NumericUpdate,
    ListAppend,
    ToggleStatus,
}

/// Presentation role fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    PrimaryAction,
    MetricDisplay,
    DataView,
    StatusIndicator,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::PrimaryAction => "primary_action",
            Role::MetricDisplay => "metric_display",
            Role::DataView => "data_view",
            Role::StatusIndicator => "status_indicator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific state; the variant is immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Base,
    Metric { value: i64 },
    DataView { items: VecDeque<String> },
    Status { active: bool },
}

impl ElementKind {
    /// Fresh kind state for a new element of each variant
    pub fn base() -> Self {
        Self::Base
    }

    pub fn metric() -> Self {
        Self::Metric { value: 0 }
    }

    pub fn data_view() -> Self {
        Self::DataView {
            items: VecDeque::new(),
        }
    }

    pub fn status() -> Self {
        Self::Status { active: false }
    }

    /// Role implied by the variant
    pub fn role(&self) -> Role {
        match self {
            ElementKind::Base => Role::PrimaryAction,
            ElementKind::Metric { .. } => Role::MetricDisplay,
            ElementKind::DataView { .. } => Role::DataView,
            ElementKind::Status { .. } => Role::StatusIndicator,
        }
    }

    /// Capability set, a pure function of the variant
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            ElementKind::Base => &[Capability::ColorChange],
            ElementKind::Metric { .. } => &[Capability::ColorChange, Capability::NumericUpdate],
            ElementKind::DataView { .. } => &[Capability::ColorChange, Capability::ListAppend],
            ElementKind::Status { .. } => &[Capability::ColorChange, Capability::ToggleStatus],
        }
    }
}

/// A named, typed unit of state created by a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub id: NodeId,
    pub role: Role,
    pub title: String,
    pub color: ColorToken,
    pub kind: ElementKind,
}

impl Element {
    /// Construct an element; the title is truncated to the schema limit
    pub fn new(id: NodeId, kind: ElementKind, title: &str) -> Self {
        Self {
            id,
            role: kind.role(),
            title: schema().clamp_title(title),
            color: ColorToken::default(),
            kind,
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        self.kind.capabilities()
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Set the metric value, clamped into the schema range
    ///
    /// Returns the stored value, or None when the element is not a metric.
    /// The caller is expected to have verified `NumericUpdate`.
    pub fn set_value(&mut self, raw: i64) -> Option<i64> {
        match &mut self.kind {
            ElementKind::Metric { value } => {
                *value = schema().clamp_metric(raw);
                Some(*value)
            }
            _ => None,
        }
    }

    /// Append an entry, dropping the oldest entries past the schema limit
    ///
    /// Returns the resulting item count, or None when the element is not a
    /// data view. The caller is expected to have verified `ListAppend`.
    pub fn append_item(&mut self, item: &str) -> Option<usize> {
        match &mut self.kind {
            ElementKind::DataView { items } => {
                items.push_back(item.to_string());
                let limit = schema().max_data_items;
                while items.len() > limit {
                    items.pop_front();
                }
                Some(items.len())
            }
            _ => None,
        }
    }

    /// Flip the active flag
    ///
    /// Returns the new state, or None when the element is not a status
    /// indicator. The caller is expected to have verified `ToggleStatus`.
    pub fn toggle(&mut self) -> Option<bool> {
        match &mut self.kind {
            ElementKind::Status { active } => {
                *active = !*active;
                Some(*active)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(kind: ElementKind) -> Element {
        Element::new(NodeId::new(0xab12), kind, "Test")
    }

    #[test]
    fn test_capability_sets_fixed_by_variant() {
        assert_eq!(
            element(ElementKind::base()).capabilities(),
            &[Capability::ColorChange]
        );
        assert!(element(ElementKind::metric()).has_capability(Capability::NumericUpdate));
        assert!(element(ElementKind::data_view()).has_capability(Capability::ListAppend));
        assert!(element(ElementKind::status()).has_capability(Capability::ToggleStatus));
        // Every variant carries the presentation-only color capability
        for kind in [
            ElementKind::base(),
            ElementKind::metric(),
            ElementKind::data_view(),
            ElementKind::status(),
        ] {
            assert!(element(kind).has_capability(Capability::ColorChange));
        }
    }

    #[test]
    fn test_roles_match_variants() {
        assert_eq!(ElementKind::base().role(), Role::PrimaryAction);
        assert_eq!(ElementKind::metric().role(), Role::MetricDisplay);
        assert_eq!(ElementKind::data_view().role(), Role::DataView);
        assert_eq!(ElementKind::status().role(), Role::StatusIndicator);
        assert_eq!(Role::MetricDisplay.to_string(), "metric_display");
    }

    #[test]
    fn test_title_truncated_at_construction() {
        let long = "a".repeat(100);
        let el = Element::new(NodeId::new(1), ElementKind::base(), &long);
        assert_eq!(el.title.len(), 32);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut el = element(ElementKind::metric());
        assert_eq!(el.set_value(150), Some(100));
        assert_eq!(el.set_value(-5), Some(0));
        assert_eq!(el.set_value(42), Some(42));
    }

    #[test]
    fn test_set_value_on_wrong_variant() {
        let mut el = element(ElementKind::base());
        assert_eq!(el.set_value(10), None);
    }

    #[test]
    fn test_append_rotates_past_limit() {
        let mut el = element(ElementKind::data_view());
        for i in 0..55 {
            el.append_item(&format!("entry {}", i));
        }
        match &el.kind {
            ElementKind::DataView { items } => {
                assert_eq!(items.len(), 50);
                assert_eq!(items.front().map(String::as_str), Some("entry 5"));
                assert_eq!(items.back().map(String::as_str), Some("entry 54"));
            }
            _ => panic!("expected data view"),
        }
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut el = element(ElementKind::status());
        assert_eq!(el.toggle(), Some(true));
        assert_eq!(el.toggle(), Some(false));
    }
}
