//! Account Service
//!
//! Registration, login and token authentication on top of a [`Store`].

use std::sync::Arc;

use crate::error::{AccountError, Result};
use crate::store::Store;
use crate::token::{Claims, TokenIssuer};
use crate::user::{User, UserProfile};

pub const DEMO_EMAIL: &str = "demo.google.user@example.com";
pub const DEMO_NAME: &str = "Google Demo User";
const DEMO_PASSWORD: &str = "google_demo";

/// A signed-in user and their fresh token
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Identity operations shared by the HTTP handlers
#[derive(Clone)]
pub struct Accounts {
    store: Arc<dyn Store>,
    tokens: TokenIssuer,
}

impl Accounts {
    pub fn new(store: Arc<dyn Store>, tokens: TokenIssuer) -> Self {
        Self { store, tokens }
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Register a new user and sign them in
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<Session> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AccountError::MissingCredentials);
        }
        if self.store.find_user_by_email(email)?.is_some() {
            return Err(AccountError::UserExists(email.to_string()));
        }

        let user = User::new(name, email, password)?;
        self.store.insert_user(&user)?;
        tracing::info!(user_id = %user.id, email = %user.email, "Registered user");

        self.session_for(&user)
    }

    /// Sign in with email and password
    pub fn login(&self, email: &str, password: &str) -> Result<Session> {
        let user = self
            .store
            .find_user_by_email(email)?
            .filter(|user| user.verify_password(password))
            .ok_or(AccountError::InvalidCredentials)?;

        tracing::info!(user_id = %user.id, "User signed in");
        self.session_for(&user)
    }

    /// Sign in as the shared demo user, creating it on first use
    pub fn demo_login(&self) -> Result<Session> {
        let user = match self.store.find_user_by_email(DEMO_EMAIL)? {
            Some(user) => user,
            None => {
                let user = User::new(DEMO_NAME, DEMO_EMAIL, DEMO_PASSWORD)?;
                self.store.insert_user(&user)?;
                tracing::info!(user_id = %user.id, "Created demo user");
                user
            }
        };

        self.session_for(&user)
    }

    /// Validate a bearer token
    pub fn authenticate(&self, token: &str) -> Result<Claims> {
        self.tokens.verify(token)
    }

    fn session_for(&self, user: &User) -> Result<Session> {
        Ok(Session {
            token: self.tokens.issue(user)?,
            user: user.profile(),
        })
    }
}
