//! # smartvestor-accounts
//!
//! Identity and persistence collaborators for the SmartVestor service.
//!
//! - **Users**: registration and login with bcrypt password hashes
//! - **Tokens**: 7-day HS256 bearer tokens
//! - **Records**: every recommendation request/response pair, stored with
//!   a generated id and timestamp
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use smartvestor_accounts::{Accounts, JsonFileStore, TokenIssuer};
//!
//! let store = Arc::new(JsonFileStore::in_dir("data"));
//! let accounts = Accounts::new(store, TokenIssuer::new("secret"));
//!
//! let session = accounts.register("Ada", "ada@example.com", "pw")?;
//! let claims = accounts.authenticate(&session.token)?;
//! ```

mod error;
mod service;
mod store;
mod token;
mod user;

pub use error::{AccountError, Result};
pub use service::{Accounts, DEMO_EMAIL, DEMO_NAME, Session};
pub use store::{DB_FILE_NAME, Database, JsonFileStore, MemoryStore, RecommendationRecord, Store};
pub use token::{Claims, TokenIssuer, bearer_token};
pub use user::{User, UserProfile, hash_password, verify_password};
