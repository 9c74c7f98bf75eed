//! HTTP transport
//!
//! [`HttpClient`] is the seam between services and the wire. Two
//! implementations exist:
//! - [`NetworkHttpClient`]: reqwest over the network
//! - [`OneshotHttpClient`]: calls an axum `Router` in-process (feature `in-process`)
//!
//! Both attach `Authorization: Bearer <token>` from the injected
//! [`SessionStore`] on every request and map non-2xx responses through
//! [`ClientError::from_response`].

mod network;
#[cfg(feature = "in-process")]
mod oneshot;

pub use network::NetworkHttpClient;
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;

use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::Attachment;
use std::sync::Arc;

/// One file field of a multipart upload
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub attachment: Attachment,
}

impl FilePart {
    pub fn new(field: impl Into<String>, attachment: Attachment) -> Self {
        Self {
            field: field.into(),
            attachment,
        }
    }
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        parts: Vec<FilePart>,
    ) -> ClientResult<T>;

    /// Session the bearer token is read from
    fn session(&self) -> &Arc<dyn SessionStore>;
}

/// Decode a successful response body; an empty body decodes as JSON `null`
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
    let result = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(serde_json::Value::Null)
    } else {
        serde_json::from_slice(bytes)
    };
    result.map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

pub(crate) fn bearer(session: &dyn SessionStore) -> Option<String> {
    session
        .token()
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {}", t))
}
