//! Unified error types for the roadmap generator

use thiserror::Error;

/// Unified error type for all roadmap operations
#[derive(Error, Debug)]
pub enum RoadmapError {
    // Estimation errors
    #[error("Degenerate configuration: {0}")]
    DegenerateConfiguration(String),

    // Parse errors
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid risk level: {0}")]
    InvalidRiskLevel(String),

    #[error("Invalid output format: {0}")]
    InvalidFormat(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using RoadmapError
pub type Result<T> = std::result::Result<T, RoadmapError>;
