//! Interpreter session
//!
//! One command is fully processed (normalize -> extract -> classify ->
//! execute -> notify) before the next is accepted. The registry is owned
//! by the session and discarded with it; there is no background work and
//! no suspension within command processing.

pub mod events;

use crate::command::{self, ExecutionReport, IntentExecutor, NormalizedCommand};
use crate::entity::registry::Registry;
use events::LogEvent;

/// Owns the registry and drives the command pipeline
pub struct Session {
    registry: Registry,
}

impl Session {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Deterministic id allocation, for tests and replayable sessions
    pub fn with_seed(seed: u64) -> Self {
        Self {
            registry: Registry::with_seed(seed),
        }
    }

    /// Log line announcing the interpreter is ready
    pub fn startup_log() -> LogEvent {
        LogEvent::success("Kernel Online. Semantic Disambiguator Active.")
    }

    /// Process one raw command line
    ///
    /// Blank input yields no report. Everything else produces exactly one
    /// log event, plus state-change notifications for successful
    /// creations and interactions.
    pub fn process(&mut self, input: &str) -> Option<ExecutionReport> {
        let command = NormalizedCommand::parse(input)?;
        let intent = command::interpret(&command);
        tracing::debug!(kind = ?intent.kind, target = ?intent.target, "classified command");
        Some(IntentExecutor::execute(
            &mut self.registry,
            &intent,
            &command,
        ))
    }

    /// Read-only view of the element registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
