//! Object storage client (Supabase Storage REST API).
//!
//! Uploaded images are stored under a single bucket and served from the
//! bucket's public URL; the backend only ever sees those URLs.

use reqwest::Method;
use serde::Serialize;
use url::Url;

use fivetv_core::upload::object_path_from_public_url;

use crate::error::ClientError;

/// Bucket used when none is configured.
pub const DEFAULT_BUCKET: &str = "FiveTv";

const MISSING_URL: &str = "Storage URL is missing. Please check your environment variables.";
const MISSING_KEY: &str =
    "Storage authentication key is missing. Please check your environment variables.";
const RLS_DENIED: &str =
    "Storage permission denied. Please check the bucket policies or use the service key.";

/// Connection settings for [`StorageClient`].
#[derive(Debug, Clone, Default)]
pub struct StorageSettings {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub service_key: Option<String>,
    pub bucket: Option<String>,
}

#[derive(Debug, Serialize)]
struct RemoveRequest<'a> {
    prefixes: &'a [String],
}

/// HTTP client for one storage bucket.
///
/// Missing settings do not prevent construction; every call reports them
/// instead, so the public site keeps working without storage configured.
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: Option<Url>,
    bucket: String,
    key: Option<String>,
}

impl StorageClient {
    pub fn new(settings: StorageSettings) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), settings)
    }

    pub fn with_client(http: reqwest::Client, settings: StorageSettings) -> Result<Self, ClientError> {
        let base_url = match non_blank(settings.url) {
            Some(url) => Some(Url::parse(&url)?),
            None => None,
        };
        // The service key bypasses row-level security; prefer it.
        let key = non_blank(settings.service_key).or_else(|| non_blank(settings.anon_key));
        let bucket = non_blank(settings.bucket).unwrap_or_else(|| DEFAULT_BUCKET.to_string());

        Ok(Self {
            http,
            base_url,
            bucket,
            key,
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some() && self.key.is_some()
    }

    /// Public URL under which an object is served.
    pub fn public_url(&self, path: &str) -> Result<String, ClientError> {
        let base = self.base()?;
        let url = object_url(base, &["storage", "v1", "object", "public", &self.bucket], path)?;
        Ok(url.to_string())
    }

    /// Upload `bytes` to `path` and return its public URL.
    ///
    /// Existing objects are never overwritten (`x-upsert: false`).
    pub async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ClientError> {
        let base = self.base()?;
        let key = self.key()?;
        let url = object_url(base, &["storage", "v1", "object", &self.bucket], path)?;

        tracing::info!(bucket = %self.bucket, path, size = bytes.len(), "Uploading image");

        let response = self
            .http
            .request(Method::POST, url)
            .bearer_auth(key)
            .header("apikey", key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header(reqwest::header::CACHE_CONTROL, "3600")
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "Image upload failed");
            return Err(ClientError::Storage(upload_error_message(&body)));
        }

        self.public_url(path)
    }

    /// Delete objects by path.
    pub async fn remove(&self, paths: &[String]) -> Result<(), ClientError> {
        let base = self.base()?;
        let key = self.key()?;
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["storage", "v1", "object", self.bucket.as_str()]);

        let response = self
            .http
            .request(Method::DELETE, url)
            .bearer_auth(key)
            .header("apikey", key)
            .json(&RemoveRequest { prefixes: paths })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Storage(format!(
                "Gagal menghapus gambar ({}): {body}",
                status.as_u16()
            )));
        }
        Ok(())
    }

    /// Delete the object behind a public URL, best-effort.
    ///
    /// Blank and `"-"` URLs have nothing to delete and count as success.
    /// Failures are logged and reported as `false`, never raised.
    pub async fn remove_public_url(&self, public_url: &str) -> bool {
        let Some(path) = object_path_from_public_url(public_url) else {
            return true;
        };
        match self.remove(&[path.clone()]).await {
            Ok(()) => {
                tracing::info!(path = %path, "Removed old image");
                true
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Failed to remove old image");
                false
            }
        }
    }

    fn base(&self) -> Result<&Url, ClientError> {
        self.base_url
            .as_ref()
            .ok_or_else(|| ClientError::Storage(MISSING_URL.to_string()))
    }

    fn key(&self) -> Result<&str, ClientError> {
        self.key
            .as_deref()
            .ok_or_else(|| ClientError::Storage(MISSING_KEY.to_string()))
    }
}

/// `base` + fixed segments + the slash-separated object path.
fn object_url(base: &Url, prefix: &[&str], path: &str) -> Result<Url, ClientError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(prefix)
        .extend(path.split('/').filter(|s| !s.is_empty()));
    Ok(url)
}

fn upload_error_message(body: &str) -> String {
    if body.contains("row-level security policy") {
        return RLS_DENIED.to_string();
    }
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string());
    format!("Gagal mengunggah gambar: {detail}")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
