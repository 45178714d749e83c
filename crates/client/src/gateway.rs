//! The single chokepoint for outbound HTTP calls to the admin backend.
//!
//! Every resource service goes through [`Gateway::request`]: it attaches the
//! bearer token from the injected [`TokenStore`], encodes the body (JSON or
//! multipart), tags the call with an `X-Request-Id`, and decodes the
//! `{code, message, result}` envelope. A non-2xx HTTP status is a hard
//! failure and returns [`ClientError::Http`]; a non-1000 envelope code is a
//! soft failure that `request` passes through as data, with the typed
//! helpers converting it via [`Envelope::into_result`].

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use techmart_core::envelope::Envelope;
use techmart_core::token::TokenStore;
use uuid::Uuid;

use crate::body::{build_form, RequestBody};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

pub use reqwest::Method;

/// HTTP client for the admin backend.
///
/// Cheap to clone: the connection pool and token store are shared.
#[derive(Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl Gateway {
    /// Create a gateway with a pooled connection and the given token store.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            tokens,
        })
    }

    /// Base URL this gateway targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store this gateway reads from.
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.tokens)
    }

    /// Issue a request and decode the response envelope.
    ///
    /// Returns the envelope as data without failing on application-level
    /// codes; callers that want the unified `Result` use [`Self::expect`] /
    /// [`Self::ack`] instead.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> ClientResult<Envelope<serde_json::Value>> {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("X-Request-Id", request_id.to_string());

        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token);
        }

        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart { fields, file } => request.multipart(build_form(fields, file)?),
        };

        tracing::debug!(%method, %url, %request_id, "sending API request");

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(%method, %url, %request_id, status = status.as_u16(), "API request failed");
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(&text)?;

        if !envelope.is_success() {
            tracing::debug!(%request_id, code = envelope.code, "API returned failure code");
        }

        Ok(envelope)
    }

    /// Request a data endpoint, unwrapping the payload into `T`.
    pub async fn expect<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> ClientResult<T> {
        let envelope = self.request(method, path, body).await?;
        let value = envelope.into_result()?;
        Ok(serde_json::from_value(value)?)
    }

    /// GET a data endpoint.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.expect(Method::GET, path, RequestBody::Empty).await
    }

    /// Request an acknowledge-only endpoint (delete, status update).
    pub async fn ack(&self, method: Method, path: &str, body: RequestBody) -> ClientResult<()> {
        let envelope = self.request(method, path, body).await?;
        envelope.into_ack()?;
        Ok(())
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
