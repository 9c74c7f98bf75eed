// dms-client/src/http/oneshot.rs
// Oneshot HTTP client - in-process calls into an axum Router
//
// Requires the "in-process" feature

use super::{FilePart, HttpClient, bearer, decode_body};
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;
use ::http::{Method, Request, header};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;

const MULTIPART_BOUNDARY: &str = "dms-client-boundary-7MA4YWxkTrZu0gW";

/// Oneshot HTTP client (in-memory calls)
///
/// Drives an axum `Router` through tower's `oneshot`, so the same services
/// and orchestrator run against an embedded backend without a socket.
///
/// # Example
///
/// ```ignore
/// let router: Router = fake_backend(state);
/// let client = OneshotHttpClient::new(router, Arc::new(MemorySessionStore::new()));
/// let orders: serde_json::Value = client.get("/api/Order").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    session: Arc<dyn SessionStore>,
}

impl OneshotHttpClient {
    pub fn new(router: Router, session: Arc<dyn SessionStore>) -> Self {
        Self { router, session }
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        content_type: Option<&str>,
        body: Body,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(auth) = bearer(self.session.as_ref()) {
            builder = builder.header(header::AUTHORIZATION, auth);
        }
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn json_request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let bytes = serde_json::to_vec(body)?;
        self.build_request(method, path, Some("application/json"), Body::from(bytes))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let path = request.uri().path().to_string();
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            let err = ClientError::from_response(status, &text);
            tracing::warn!(path = %path, status = status.as_u16(), error = %err, "Request rejected");
            return Err(err);
        }
        decode_body(&bytes)
    }
}

/// Quoted-string value for a `Content-Disposition` parameter
fn quote_param(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .fold(String::with_capacity(value.len()), |mut out, c| {
            if c == '"' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
            out
        })
}

/// Encode file parts as `multipart/form-data`
fn encode_multipart(parts: &[FilePart]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                quote_param(&part.field),
                quote_param(&part.attachment.file_name)
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!("Content-Type: {}\r\n\r\n", part.attachment.mime_type).as_bytes(),
        );
        body.extend_from_slice(&part.attachment.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
    body
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, None, Body::empty())?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.json_request(Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.json_request(Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, path, None, Body::empty())?;
        self.execute(request).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        parts: Vec<FilePart>,
    ) -> ClientResult<T> {
        let content_type = format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY);
        let request = self.build_request(
            Method::POST,
            path,
            Some(&content_type),
            Body::from(encode_multipart(&parts)),
        )?;
        self.execute(request).await
    }

    fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }
}
