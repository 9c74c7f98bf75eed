//! Session storage
//!
//! Holds the bearer token and the signed-in operator's profile. The HTTP
//! client reads the token before every request; sign-in and sign-out are the
//! only writers.

use crate::error::ClientResult;
use serde::{Deserialize, Serialize};
use shared::lifecycle::Role;
use shared::models::UserProfile;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

const SESSION_FILE: &str = "session.json";

/// Persisted session, stored as `{ "token": .., "user": {..} }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }
}

/// Source of the bearer token and operator profile
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    fn token(&self) -> Option<String>;
    fn user(&self) -> Option<UserProfile>;
    fn save(&self, session: Session) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;

    /// Role of the signed-in operator; dealer staff when signed out
    fn role(&self) -> Role {
        self.user().map(|u| u.role).unwrap_or_default()
    }
}

/// Session kept in memory only
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: RwLock::new(session),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    fn user(&self) -> Option<UserProfile> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    fn save(&self, session: Session) -> ClientResult<()> {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = session;
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        self.save(Session::default())
    }
}

/// Session persisted as JSON under a directory
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    cache: MemorySessionStore,
}

impl FileSessionStore {
    /// Open the store, loading any existing session file
    ///
    /// An unreadable or corrupt file is treated as signed out.
    pub fn new(dir: impl AsRef<Path>) -> ClientResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(SESSION_FILE);
        let session = Self::load(&path).unwrap_or_default();
        Ok(Self {
            path,
            cache: MemorySessionStore::with_session(session),
        })
    }

    fn load(path: &Path) -> Option<Session> {
        if !path.exists() {
            return None;
        }
        let json = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt session file");
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.cache.token()
    }

    fn user(&self) -> Option<UserProfile> {
        self.cache.user()
    }

    fn save(&self, session: Session) -> ClientResult<()> {
        let json = serde_json::to_string_pretty(&session)?;
        fs::write(&self.path, json)?;
        self.cache.save(session)
    }

    fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.cache.clear()
    }
}
