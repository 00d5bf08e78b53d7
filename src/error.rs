// src/error.rs

use thiserror::Error;

/// Failures surfaced by the chat-model client.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Transport(String),

    #[error("chat reply carried no usable text")]
    EmptyCompletion,
}

/// Errors that abort a pipeline run. Lookup failures are NOT here — those
/// are absorbed into feasibility flags and never raised.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unknown prompt style: {0}")]
    UnknownStyle(String),

    #[error("plan generation failed: {0}")]
    Generation(#[source] ChatError),

    #[error("plan evaluation failed: {0}")]
    Evaluation(#[source] ChatError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
