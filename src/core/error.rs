use thiserror::Error;

use crate::core::types::NodeId;

#[derive(Error, Debug)]
pub enum ShellError {
    /// Interaction target absent from the registry.
    #[error("Error: Node '{0}' not found.")]
    EntityNotFound(NodeId),

    /// Target exists but lacks the capability the interaction requires.
    #[error("Capability Error: {0}")]
    CapabilityMismatch(String),

    /// Command text did not classify into any known intent.
    #[error("Interpreter: Semantic Mismatch.")]
    IntentUnresolved,

    /// Numeric interaction with no integer token in the command text.
    /// Reported with the same generic message as an unresolved intent.
    #[error("Interpreter: Semantic Mismatch.")]
    ValueExtractionFailure,

    /// The 16-bit id space is fully allocated.
    #[error("Registry exhausted: no free node ids")]
    RegistryExhausted,

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
