//! Content item CRUD for the article editor.

use fivetv_core::jenis::Jenis;
use fivetv_core::konten::{ArticlePayload, KontenDetail};
use reqwest::Method;

use crate::api::BackendClient;
use crate::envelope::{Ack, ApiEnvelope};
use crate::error::ClientError;

impl BackendClient {
    /// `GET /api/admin/jenis`, with the token when one is set.
    pub async fn list_jenis(&self) -> Result<Vec<Jenis>, ClientError> {
        let response = self
            .request(Method::GET, &["api", "admin", "jenis"])?
            .send()
            .await?;
        let envelope: ApiEnvelope<Vec<Jenis>> = Self::parse_response(response).await?;
        envelope.into_data("Gagal memuat jenis")
    }

    /// `GET /api/admin/konten/{kode}`
    pub async fn get_konten(&self, kode: &str) -> Result<KontenDetail, ClientError> {
        let response = self
            .authorized(Method::GET, &["api", "admin", "konten", kode])?
            .send()
            .await?;
        let envelope: ApiEnvelope<KontenDetail> = Self::parse_response(response).await?;
        envelope.into_data("Konten tidak ditemukan")
    }

    /// `POST /api/admin/konten`
    pub async fn create_konten(&self, payload: &ArticlePayload) -> Result<Ack, ClientError> {
        let response = self
            .authorized(Method::POST, &["api", "admin", "konten"])?
            .json(payload)
            .send()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> = Self::parse_response(response).await?;
        envelope.into_ack("Gagal menambahkan konten")
    }

    /// `PUT /api/admin/konten/{kode}`
    pub async fn update_konten(
        &self,
        kode: &str,
        payload: &ArticlePayload,
    ) -> Result<Ack, ClientError> {
        let response = self
            .authorized(Method::PUT, &["api", "admin", "konten", kode])?
            .json(payload)
            .send()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> = Self::parse_response(response).await?;
        envelope.into_ack("Gagal memperbarui konten")
    }

    /// `DELETE /api/admin/konten/{kode}`
    pub async fn delete_konten(&self, kode: &str) -> Result<Ack, ClientError> {
        let response = self
            .authorized(Method::DELETE, &["api", "admin", "konten", kode])?
            .send()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> = Self::parse_response(response).await?;
        envelope.into_ack("Gagal menghapus konten")
    }
}
