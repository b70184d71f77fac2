//! Users and Password Hashing
//!
//! Passwords are stored as bcrypt hashes (`$2b$10$...`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AccountError, Result};

/// bcrypt work factor
pub const PASSWORD_COST: u32 = 10;

/// A registered user record
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    pub name: String,

    pub email: String,

    /// bcrypt hash (never the plain password)
    #[serde(rename = "password")]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user, hashing the given password
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: &str) -> Result<Self> {
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            password_hash: hash_password(password)?,
            created_at: Utc::now(),
        })
    }

    pub fn verify_password(&self, password: &str) -> bool {
        verify_password(password, &self.password_hash)
    }

    /// Case-insensitive email match
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Public view of a user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, PASSWORD_COST).map_err(|e| AccountError::Crypto(e.to_string()))
}

/// Check a password against a stored bcrypt hash. Malformed hashes never match.
pub fn verify_password(password: &str, stored: &str) -> bool {
    bcrypt::verify(password, stored).unwrap_or_else(|e| {
        tracing::warn!("Unreadable password hash: {}", e);
        false
    })
}
