//! Error types for Easel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Primary error type for all Easel operations.
#[derive(Error, Debug)]
pub enum EaselError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Authentication failed. Check your Canvas access token.")]
    Unauthorized,

    #[error("{resource} is disabled for this course.")]
    Forbidden { resource: String },

    #[error("{resource} not found. Check the course ID or endpoint.")]
    NotFound { resource: String },

    #[error("Rate limit exceeded. Wait a moment and try again.")]
    RateLimited,

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Canvas API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("All {0} courses failed during aggregation")]
    AllCoursesFailed(usize),

    #[error("Tool execution error: {tool_name}: {message}")]
    ToolExecution { tool_name: String, message: String },
}

/// Closed failure taxonomy surfaced to the calling agent.
///
/// Serializes snake_case, so it can be embedded directly in the structured
/// error object an operation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    Network,
    Unknown,
}

impl EaselError {
    /// Classify this error into the agent-facing taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::RateLimited => ErrorKind::RateLimited,
            Self::Timeout(_) | Self::Network(_) => ErrorKind::Network,
            Self::Api { status, .. } => match status {
                401 => ErrorKind::Unauthorized,
                403 => ErrorKind::Forbidden,
                404 => ErrorKind::NotFound,
                429 => ErrorKind::RateLimited,
                _ => ErrorKind::Unknown,
            },
            _ => ErrorKind::Unknown,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, EaselError>;
