//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `DMS_API_BASE_URL` | `http://localhost:5000` |
//! | `DMS_REQUEST_TIMEOUT_SECS` | `30` |
//! | `DMS_SESSION_DIR` | unset (in-memory session) |
//! | `DMS_LOG_LEVEL` | `info` |

use crate::error::{ClientError, ClientResult};
use crate::http::NetworkHttpClient;
use crate::session::{FileSessionStore, MemorySessionStore, SessionStore};
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the dealership backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory for the persisted session; `None` keeps it in memory
    pub session_dir: Option<PathBuf>,

    /// Default log filter for [`crate::logger::init_logger`]
    pub log_level: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            session_dir: None,
            log_level: "info".into(),
        }
    }

    /// Read configuration from the environment, loading `.env` first if present
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            base_url: std::env::var("DMS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into()),
            timeout: std::env::var("DMS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            session_dir: std::env::var("DMS_SESSION_DIR").ok().map(PathBuf::from),
            log_level: std::env::var("DMS_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist the session under `dir`
    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = Some(dir.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Reject configurations that cannot produce a working client
    pub fn validate(&self) -> ClientResult<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout == 0 {
            return Err(ClientError::Config("timeout must be positive".into()));
        }
        Ok(())
    }

    /// Session store selected by `session_dir`
    pub fn build_session_store(&self) -> ClientResult<Arc<dyn SessionStore>> {
        Ok(match &self.session_dir {
            Some(dir) => Arc::new(FileSessionStore::new(dir)?),
            None => Arc::new(MemorySessionStore::new()),
        })
    }

    /// Create a network client from this configuration
    pub fn build_http_client(&self, session: Arc<dyn SessionStore>) -> ClientResult<NetworkHttpClient> {
        self.validate()?;
        NetworkHttpClient::new(self, session)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
