// dms-client/src/http/network.rs
// Network HTTP client (reqwest)

use super::{FilePart, HttpClient, bearer, decode_body};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if let Some(auth) = bearer(self.session.as_ref()) {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder, path: &str) -> ClientResult<T> {
        let response = req.send().await.map_err(|e| {
            tracing::error!(path, error = %e, "Request failed");
            ClientError::from(e)
        })?;
        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            let err = ClientError::from_response(status, &text);
            tracing::warn!(path, status = status.as_u16(), error = %err, "Request rejected");
            return Err(err);
        }
        decode_body(&bytes)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(method = "GET", path, "Sending request");
        self.send(self.request(Method::GET, path), path).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(method = "POST", path, "Sending request");
        self.send(self.request(Method::POST, path).json(body), path)
            .await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(method = "PUT", path, "Sending request");
        self.send(self.request(Method::PUT, path).json(body), path)
            .await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(method = "DELETE", path, "Sending request");
        self.send(self.request(Method::DELETE, path), path).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        parts: Vec<FilePart>,
    ) -> ClientResult<T> {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            let file = reqwest::multipart::Part::bytes(part.attachment.bytes)
                .file_name(part.attachment.file_name)
                .mime_str(&part.attachment.mime_type)?;
            form = form.part(part.field, file);
        }
        tracing::debug!(method = "POST", path, "Sending multipart request");
        self.send(self.request(Method::POST, path).multipart(form), path)
            .await
    }

    fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }
}
