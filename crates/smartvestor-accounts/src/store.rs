//! Record Storage
//!
//! Users and recommendation records live in one small document,
//! `{ "sessions": [...], "users": [...] }`, either in memory or in a JSON file.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use smartvestor_advisor::AdviceDocument;

use crate::error::{AccountError, Result};
use crate::user::User;

/// Default database file name inside the data directory
pub const DB_FILE_NAME: &str = "smartvestor.json";

/// One persisted recommendation request/response pair
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub id: String,

    /// Request body exactly as received
    pub input: Value,

    pub advice: AdviceDocument,

    pub created_at: DateTime<Utc>,
}

impl RecommendationRecord {
    pub fn new(input: Value, advice: AdviceDocument) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            input,
            advice,
            created_at: Utc::now(),
        }
    }
}

/// The whole stored document
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub sessions: Vec<RecommendationRecord>,

    #[serde(default)]
    pub users: Vec<User>,
}

impl Database {
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.has_email(email))
    }

    /// Add a user unless the email is taken
    fn insert_user(&mut self, user: User) -> Result<()> {
        if self.find_user_by_email(&user.email).is_some() {
            return Err(AccountError::UserExists(user.email));
        }
        self.users.push(user);
        Ok(())
    }
}

/// Storage trait for users and recommendation records
pub trait Store: Send + Sync {
    /// Find a user by email (case-insensitive)
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert a new user; fails with `UserExists` on a duplicate email
    fn insert_user(&self, user: &User) -> Result<()>;

    /// Append a recommendation record
    fn append_record(&self, record: &RecommendationRecord) -> Result<()>;

    /// All records, oldest first
    fn records(&self) -> Result<Vec<RecommendationRecord>>;
}

fn poisoned<T>(_: T) -> AccountError {
    AccountError::Storage("store lock poisoned".into())
}

/// In-memory store (for development and tests)
#[derive(Debug, Default)]
pub struct MemoryStore {
    db: RwLock<Database>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let db = self.db.read().map_err(poisoned)?;
        Ok(db.find_user_by_email(email).cloned())
    }

    fn insert_user(&self, user: &User) -> Result<()> {
        let mut db = self.db.write().map_err(poisoned)?;
        db.insert_user(user.clone())
    }

    fn append_record(&self, record: &RecommendationRecord) -> Result<()> {
        let mut db = self.db.write().map_err(poisoned)?;
        db.sessions.push(record.clone());
        Ok(())
    }

    fn records(&self) -> Result<Vec<RecommendationRecord>> {
        let db = self.db.read().map_err(poisoned)?;
        Ok(db.sessions.clone())
    }
}

/// Flat-file JSON store.
///
/// Every operation reloads the file, so external edits are picked up.
/// Mutations hold a lock across load, modify and save.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store backed by `<data_dir>/smartvestor.json`
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DB_FILE_NAME))
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data directory and an empty database if missing
    pub fn ensure(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "Creating empty database");
            self.save(&Database::default())?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Database> {
        self.ensure()?;
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write to a sibling temp file and rename it over the database, so a
    /// crash mid-write leaves the previous contents intact.
    fn save(&self, db: &Database) -> Result<()> {
        let raw = serde_json::to_vec_pretty(db)?;
        let dir = self
            .path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&raw)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn update<T>(&self, f: impl FnOnce(&mut Database) -> Result<T>) -> Result<T> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        let mut db = self.load()?;
        let out = f(&mut db)?;
        self.save(&db)?;
        Ok(out)
    }
}

impl Store for JsonFileStore {
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        Ok(self.load()?.find_user_by_email(email).cloned())
    }

    fn insert_user(&self, user: &User) -> Result<()> {
        self.update(|db| db.insert_user(user.clone()))
    }

    fn append_record(&self, record: &RecommendationRecord) -> Result<()> {
        self.update(|db| {
            db.sessions.push(record.clone());
            Ok(())
        })
    }

    fn records(&self) -> Result<Vec<RecommendationRecord>> {
        let _guard = self.lock.lock().map_err(poisoned)?;
        Ok(self.load()?.sessions)
    }
}
