//! HTTP client for the FiveTv backend REST API.
//!
//! One [`BackendClient`] is built at startup and shared; admin handlers
//! derive a token-carrying copy with [`BackendClient::with_token`] per
//! request. Endpoint groups live in sibling modules as further
//! `impl BackendClient` blocks.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ClientError;

/// Message shown when the backend rejects the session token.
pub const SESSION_EXPIRED: &str = "Authentication failed. Please login again.";

/// Message shown when the backend refuses an authenticated call.
pub const ACCESS_DENIED: &str = "Access denied. Please check your permissions or login again.";

/// HTTP client for the backend API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl BackendClient {
    /// Create a client for the API at `base_url`, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            token: None,
        })
    }

    /// A copy of this client that sends `Authorization: Bearer {token}`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ---- request builders ----

    /// Absolute URL for the given path segments. Segments are percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Request with the bearer token attached when one is set.
    pub(crate) fn request(
        &self,
        method: reqwest::Method,
        segments: &[&str],
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let builder = self.anonymous(method, segments)?;
        Ok(match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Request that requires a token; fails without sending when none is set.
    pub(crate) fn authorized(
        &self,
        method: reqwest::Method,
        segments: &[&str],
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        if self.token.is_none() {
            return Err(ClientError::MissingToken);
        }
        self.request(method, segments)
    }

    /// Request that never carries the token.
    pub(crate) fn anonymous(
        &self,
        method: reqwest::Method,
        segments: &[&str],
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, %url, "Backend request");
        Ok(self
            .http
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, "application/json"))
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code.
    ///
    /// 401 and 403 map to [`ClientError::Unauthorized`] and
    /// [`ClientError::Forbidden`]; any other failure becomes
    /// [`ClientError::Api`] carrying the body's `message` when it has one.
    pub(crate) async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {e}>"));
        tracing::warn!(status = status.as_u16(), body = %body, "Backend request failed");

        match status.as_u16() {
            401 => Err(ClientError::Unauthorized(SESSION_EXPIRED.to_string())),
            403 => Err(ClientError::Forbidden(ACCESS_DENIED.to_string())),
            code => Err(ClientError::Api {
                status: code,
                message: error_message(&body)
                    .unwrap_or_else(|| format!("HTTP error! status: {code}")),
            }),
        }
    }

    /// Check the status and deserialize the JSON body.
    pub(crate) async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Pull a human-readable message out of an error body, if it is JSON with
/// a `message` or `error` string.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
