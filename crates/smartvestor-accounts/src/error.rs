//! Account Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, AccountError>;

/// Identity and storage errors
#[derive(Error, Debug)]
pub enum AccountError {
    /// Registration without email or password
    #[error("Email and password required")]
    MissingCredentials,

    /// Email already registered
    #[error("User already exists: {0}")]
    UserExists(String),

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token failed signature or claim validation
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token past its expiry
    #[error("Token expired")]
    TokenExpired,

    /// Password hashing or token signing failed
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AccountError {
    /// Whether the caller failed to authenticate (as opposed to a server fault)
    pub const fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::InvalidToken(_) | Self::TokenExpired
        )
    }

    /// Get user-friendly message
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "Email and password required",
            Self::UserExists(_) => "User already exists",
            Self::InvalidCredentials => "Invalid credentials",
            Self::InvalidToken(_) | Self::TokenExpired => "Invalid token",
            _ => "An error occurred processing your request.",
        }
    }
}
