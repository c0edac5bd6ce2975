//! Error types for neurolens
//!
//! Uses thiserror for ergonomic error definitions with clear messages
//! that guide users toward fixing common issues. Rewriting itself never
//! fails; these cover everything around it.

use thiserror::Error;

/// Top-level error type for the neurolens application
#[derive(Error, Debug)]
pub enum NeurolensError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown tone: '{0}'. Run 'neurolens tones' to list the available tones.")]
    UnknownTone(String),

    #[error("Unknown output format: '{0}'. Use \"text\" or \"json\".")]
    UnknownFormat(String),

    #[error("Processor error: {0}")]
    Processor(#[from] ProcessorError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors shared by on-device processors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProcessorError {
    #[error("Processor not initialized")]
    NotInitialized,
}

/// Result type alias using NeurolensError
pub type Result<T> = std::result::Result<T, NeurolensError>;
