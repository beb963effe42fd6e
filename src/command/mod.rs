//! Command translation pipeline
//!
//! Converts free text into an executable intent:
//! raw text -> NormalizedCommand -> {target reference, label} -> Intent
//! -> IntentExecutor

pub mod classifier;
pub mod executor;
pub mod label;
pub mod normalizer;
pub mod reference;

pub use classifier::{Intent, IntentKind};
pub use executor::{ExecutionReport, IntentExecutor};
pub use normalizer::NormalizedCommand;

/// Run the extraction stages over one normalized command
///
/// Pure: no registry access happens until execution.
pub fn interpret(command: &NormalizedCommand) -> Intent {
    let target = reference::extract_target(command.lowered());
    let kind = classifier::classify(command.lowered(), target.is_some());
    let label = label::extract_label(command.raw());
    Intent {
        kind,
        target,
        label,
    }
}
