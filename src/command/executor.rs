//! Intent execution against the element registry
//!
//! The executor resolves the target, checks the required capability, and
//! applies the mutation. Every failure is converted into a single
//! user-visible message here; nothing propagates past this boundary.

use crate::command::classifier::{Intent, IntentKind};
use crate::command::normalizer::NormalizedCommand;
use crate::core::error::ShellError;
use crate::core::types::NodeId;
use crate::entity::element::{Capability, Element, ElementKind};
use crate::entity::registry::Registry;
use crate::session::events::{LogEvent, SessionEvent};

/// Outcome of one executed command: one log line plus presentation events
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    pub log: LogEvent,
    pub events: Vec<SessionEvent>,
}

impl ExecutionReport {
    fn success(text: String, events: Vec<SessionEvent>) -> Self {
        Self {
            log: LogEvent::success(text),
            events,
        }
    }
}

/// Executes classified intents against a registry
pub struct IntentExecutor;

impl IntentExecutor {
    /// Execute one intent, mutating the registry
    ///
    /// Failures never escape: they become an error-level log event with
    /// no presentation events and no mutation.
    pub fn execute(
        registry: &mut Registry,
        intent: &Intent,
        command: &NormalizedCommand,
    ) -> ExecutionReport {
        match Self::apply(registry, intent, command) {
            Ok(report) => report,
            Err(err) => {
                tracing::debug!(error = %err, "command rejected");
                ExecutionReport {
                    log: LogEvent::error(err.to_string()),
                    events: Vec::new(),
                }
            }
        }
    }

    fn apply(
        registry: &mut Registry,
        intent: &Intent,
        command: &NormalizedCommand,
    ) -> Result<ExecutionReport, ShellError> {
        match intent.kind {
            IntentKind::CreateBase => Self::create(registry, ElementKind::base(), &intent.label),
            IntentKind::CreateMetric => {
                Self::create(registry, ElementKind::metric(), &intent.label)
            }
            IntentKind::CreateData => {
                Self::create(registry, ElementKind::data_view(), &intent.label)
            }
            IntentKind::CreateStatus => {
                Self::create(registry, ElementKind::status(), &intent.label)
            }
            IntentKind::InteractNumeric => Self::set_numeric(registry, intent, command),
            IntentKind::InteractToggle => Self::toggle(registry, intent),
            IntentKind::InteractAppend => Self::append(registry, intent),
            IntentKind::Unknown => Err(ShellError::IntentUnresolved),
        }
    }

    fn create(
        registry: &mut Registry,
        kind: ElementKind,
        label: &str,
    ) -> Result<ExecutionReport, ShellError> {
        let element = registry.create(kind, label)?;
        let text = format!("Created {} ({})", element.role, element.id);
        let events = vec![SessionEvent::ElementCreated {
            element: element.clone(),
        }];
        Ok(ExecutionReport::success(text, events))
    }

    fn set_numeric(
        registry: &mut Registry,
        intent: &Intent,
        command: &NormalizedCommand,
    ) -> Result<ExecutionReport, ShellError> {
        let id = Self::require_target(intent)?;
        let element = Self::resolve_mut(registry, id)?;
        if !element.has_capability(Capability::NumericUpdate) {
            return Err(ShellError::CapabilityMismatch(format!(
                "{} is not a metric.",
                id
            )));
        }
        // The id substring is excluded from the scan so digits inside the
        // id cannot be read as the value.
        let haystack = command.lowered().replace(&id.to_string(), "");
        let raw = first_integer(&haystack).ok_or(ShellError::ValueExtractionFailure)?;
        let value = match element.set_value(raw) {
            Some(value) => value,
            None => {
                return Err(ShellError::CapabilityMismatch(format!(
                    "{} is not a metric.",
                    id
                )))
            }
        };
        let text = format!("Set {} to {}%", id, value);
        Ok(ExecutionReport::success(text, Self::updated_events(registry, id)))
    }

    fn toggle(registry: &mut Registry, intent: &Intent) -> Result<ExecutionReport, ShellError> {
        let id = Self::require_target(intent)?;
        let element = Self::resolve_mut(registry, id)?;
        if !element.has_capability(Capability::ToggleStatus) {
            return Err(ShellError::CapabilityMismatch(format!(
                "{} cannot be toggled.",
                id
            )));
        }
        element.toggle();
        let text = format!("Toggled {}", id);
        Ok(ExecutionReport::success(text, Self::updated_events(registry, id)))
    }

    fn append(registry: &mut Registry, intent: &Intent) -> Result<ExecutionReport, ShellError> {
        let id = Self::require_target(intent)?;
        let element = Self::resolve_mut(registry, id)?;
        if !element.has_capability(Capability::ListAppend) {
            return Err(ShellError::CapabilityMismatch(format!(
                "{} is not a data list.",
                id
            )));
        }
        element.append_item(&intent.label);
        let text = format!("Logged data to {}", id);
        Ok(ExecutionReport::success(text, Self::updated_events(registry, id)))
    }

    /// Interactions without an extracted target cannot name a missing
    /// node, so they report the generic mismatch.
    fn require_target(intent: &Intent) -> Result<NodeId, ShellError> {
        intent.target.ok_or(ShellError::IntentUnresolved)
    }

    fn resolve_mut(registry: &mut Registry, id: NodeId) -> Result<&mut Element, ShellError> {
        registry.get_mut(id).ok_or(ShellError::EntityNotFound(id))
    }

    /// Update notification plus the pulse cue for a successful interaction
    fn updated_events(registry: &Registry, id: NodeId) -> Vec<SessionEvent> {
        match registry.get(id) {
            Some(element) => vec![
                SessionEvent::ElementUpdated {
                    id,
                    element: element.clone(),
                },
                SessionEvent::Pulse { id },
            ],
            None => Vec::new(),
        }
    }
}

/// First delimited integer token in `text`
///
/// A digit run counts only when not glued to a word character on either
/// side. A minus sign immediately before the run is taken as part of the
/// token, so negative inputs clamp to the range floor instead of reading
/// as their magnitude. Magnitudes beyond i64 saturate.
fn first_integer(text: &str) -> Option<i64> {
    let bytes = text.as_bytes();
    let is_word = |b: u8| b.is_ascii_alphanumeric() || b == b'_';
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        let mut end = i;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let bounded_left = start == 0 || !is_word(bytes[start - 1]);
        let bounded_right = end == bytes.len() || !is_word(bytes[end]);
        if bounded_left && bounded_right {
            let negative = start > 0
                && bytes[start - 1] == b'-'
                && (start < 2 || !is_word(bytes[start - 2]));
            let magnitude = text[start..end].parse::<i64>().unwrap_or(i64::MAX);
            return Some(if negative {
                magnitude.checked_neg().unwrap_or(i64::MIN)
            } else {
                magnitude
            });
        }
        i = end;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(kind: IntentKind, target: Option<NodeId>, label: &str) -> Intent {
        Intent {
            kind,
            target,
            label: label.to_string(),
        }
    }

    fn command(text: &str) -> NormalizedCommand {
        NormalizedCommand::parse(text).unwrap()
    }

    #[test]
    fn test_create_reports_role_and_id() {
        let mut registry = Registry::with_seed(11);
        let report = IntentExecutor::execute(
            &mut registry,
            &intent(IntentKind::CreateMetric, None, "CPU Load"),
            &command("create a new progress bar called 'CPU Load'"),
        );
        let id = registry.iter().next().unwrap().id;
        assert_eq!(
            report.log.text,
            format!("Created metric_display ({})", id)
        );
        assert!(matches!(
            report.events.as_slice(),
            [SessionEvent::ElementCreated { .. }]
        ));
    }

    #[test]
    fn test_interaction_with_unknown_target_fails() {
        let mut registry = Registry::with_seed(11);
        let missing = NodeId::new(0xab12);
        let report = IntentExecutor::execute(
            &mut registry,
            &intent(IntentKind::InteractToggle, Some(missing), ""),
            &command("toggle node-ab12"),
        );
        assert_eq!(report.log.text, "Error: Node 'node-ab12' not found.");
        assert!(report.events.is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_numeric_clamps_and_reports_percent() {
        let mut registry = Registry::with_seed(11);
        let id = registry.create(ElementKind::metric(), "CPU").unwrap().id;
        let text = format!("set {} to 150", id);
        let report = IntentExecutor::execute(
            &mut registry,
            &intent(IntentKind::InteractNumeric, Some(id), "150"),
            &command(&text),
        );
        assert_eq!(report.log.text, format!("Set {} to 100%", id));
        match registry.get(id).unwrap().kind {
            ElementKind::Metric { value } => assert_eq!(value, 100),
            _ => panic!("expected metric"),
        }
    }

    #[test]
    fn test_numeric_ignores_digits_inside_id() {
        let mut registry = Registry::with_seed(11);
        let id = registry.create(ElementKind::metric(), "CPU").unwrap().id;
        // No value outside the id itself
        let text = format!("set {}", id);
        let report = IntentExecutor::execute(
            &mut registry,
            &intent(IntentKind::InteractNumeric, Some(id), ""),
            &command(&text),
        );
        assert_eq!(report.log.text, "Interpreter: Semantic Mismatch.");
        match registry.get(id).unwrap().kind {
            ElementKind::Metric { value } => assert_eq!(value, 0),
            _ => panic!("expected metric"),
        }
    }

    #[test]
    fn test_numeric_against_wrong_kind() {
        let mut registry = Registry::with_seed(11);
        let id = registry.create(ElementKind::status(), "Lamp").unwrap().id;
        let text = format!("set {} to 50", id);
        let report = IntentExecutor::execute(
            &mut registry,
            &intent(IntentKind::InteractNumeric, Some(id), "50"),
            &command(&text),
        );
        assert_eq!(
            report.log.text,
            format!("Capability Error: {} is not a metric.", id)
        );
    }

    #[test]
    fn test_append_against_wrong_kind() {
        let mut registry = Registry::with_seed(11);
        let id = registry.create(ElementKind::metric(), "CPU").unwrap().id;
        let text = format!("log 'x' to {}", id);
        let report = IntentExecutor::execute(
            &mut registry,
            &intent(IntentKind::InteractAppend, Some(id), "x"),
            &command(&text),
        );
        assert_eq!(
            report.log.text,
            format!("Capability Error: {} is not a data list.", id)
        );
    }

    #[test]
    fn test_toggle_emits_update_and_pulse() {
        let mut registry = Registry::with_seed(11);
        let id = registry.create(ElementKind::status(), "Lamp").unwrap().id;
        let text = format!("toggle {}", id);
        let report = IntentExecutor::execute(
            &mut registry,
            &intent(IntentKind::InteractToggle, Some(id), ""),
            &command(&text),
        );
        assert_eq!(report.log.text, format!("Toggled {}", id));
        assert!(matches!(
            report.events.as_slice(),
            [
                SessionEvent::ElementUpdated { .. },
                SessionEvent::Pulse { .. }
            ]
        ));
    }

    #[test]
    fn test_unknown_intent_reports_mismatch() {
        let mut registry = Registry::with_seed(11);
        let report = IntentExecutor::execute(
            &mut registry,
            &intent(IntentKind::Unknown, None, "There"),
            &command("hello there"),
        );
        assert_eq!(report.log.text, "Interpreter: Semantic Mismatch.");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_first_integer_tokens() {
        assert_eq!(first_integer("set  to 75"), Some(75));
        assert_eq!(first_integer("to -5 now"), Some(-5));
        assert_eq!(first_integer("speed5 then 20"), Some(20));
        assert_eq!(first_integer("abc12def"), None);
        assert_eq!(first_integer("no numbers"), None);
        assert_eq!(
            first_integer("at 99999999999999999999999"),
            Some(i64::MAX)
        );
    }
}
