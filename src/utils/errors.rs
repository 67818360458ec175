//! Error handling for CampusBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for CampusBuddy application
#[derive(Error, Debug)]
pub enum CampusBuddyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Session not found: {session_id}")]
    SessionNotFound { session_id: uuid::Uuid },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CampusBuddy operations
pub type Result<T> = std::result::Result<T, CampusBuddyError>;

impl CampusBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            CampusBuddyError::Config(_) => false,
            CampusBuddyError::InvalidInput(_) => true,
            CampusBuddyError::SessionNotFound { .. } => true,
            CampusBuddyError::Serialization(_) => false,
            CampusBuddyError::Io(_) => true,
        }
    }
}
