//! Error Types for the Advisor
//!
//! The engine itself is total. The only failure is an object body that
//! serde cannot map onto an advice request.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AdvisorError {
    /// Get user-friendly message
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Serialization(_) => "Failed to generate advice",
        }
    }
}
