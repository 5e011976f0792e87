//! Website configuration and taxonomy administration.

use fivetv_core::jenis::{Jenis, NewJenis};
use fivetv_core::site_config::{WebsiteConfig, WebsiteConfigData};
use reqwest::Method;

use crate::api::BackendClient;
use crate::envelope::{Ack, ApiEnvelope};
use crate::error::ClientError;

impl BackendClient {
    /// `GET /api/admin/jenis`, refusing to send without a token.
    pub async fn list_jenis_required(&self) -> Result<Vec<Jenis>, ClientError> {
        let response = self
            .authorized(Method::GET, &["api", "admin", "jenis"])?
            .send()
            .await?;
        let envelope: ApiEnvelope<Vec<Jenis>> = Self::parse_response(response).await?;
        envelope.into_data("Gagal memuat jenis")
    }

    /// `POST /api/admin/jenis`
    pub async fn add_jenis(&self, nama: &str) -> Result<Ack, ClientError> {
        let response = self
            .authorized(Method::POST, &["api", "admin", "jenis"])?
            .json(&NewJenis {
                nama: nama.trim().to_string(),
            })
            .send()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> = Self::parse_response(response).await?;
        envelope.into_ack("Gagal menambahkan jenis")
    }

    /// `GET /api/admin/config`. The backend serves this without auth, so
    /// no token is sent.
    pub async fn website_config(&self) -> Result<WebsiteConfig, ClientError> {
        let response = self
            .anonymous(Method::GET, &["api", "admin", "config"])?
            .send()
            .await?;
        let envelope: ApiEnvelope<WebsiteConfig> = Self::parse_response(response).await?;
        envelope.into_data("Gagal memuat konfigurasi website")
    }

    /// `PUT /api/admin/config`
    pub async fn update_website_config(&self, data: &WebsiteConfigData) -> Result<Ack, ClientError> {
        let response = self
            .authorized(Method::PUT, &["api", "admin", "config"])?
            .json(data)
            .send()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> = Self::parse_response(response).await?;
        envelope.into_ack("Gagal memperbarui konfigurasi website")
    }
}
