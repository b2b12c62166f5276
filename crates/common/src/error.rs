//! Error types for Hireflow.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HireflowError {
    /// Invalid or missing deployment/agent configuration. Fatal at
    /// construction time; never converted to fail-soft text.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Tool error: {0}")]
    Tool(String),

    /// Failure from the completion API or the surrounding transport.
    /// May be transient (rate limit, server error) or fatal (bad request);
    /// the retry layer inspects the message to tell them apart.
    #[error("Completion error: {0}")]
    Completion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HireflowError>;
