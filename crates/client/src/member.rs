//! Member (anggota) management.

use fivetv_core::member::{Member, MemberUpdate, NewMember};
use reqwest::Method;

use crate::api::BackendClient;
use crate::envelope::{Ack, ApiEnvelope};
use crate::error::ClientError;

impl BackendClient {
    /// `GET /api/admin/anggota`
    pub async fn list_members(&self) -> Result<Vec<Member>, ClientError> {
        let response = self
            .authorized(Method::GET, &["api", "admin", "anggota"])?
            .send()
            .await?;
        let envelope: ApiEnvelope<Vec<Member>> = Self::parse_response(response).await?;
        envelope.into_data("Gagal memuat data anggota")
    }

    /// `GET /api/admin/anggota/{nim}`
    pub async fn get_member(&self, nim: &str) -> Result<Member, ClientError> {
        let response = self
            .authorized(Method::GET, &["api", "admin", "anggota", nim])?
            .send()
            .await?;
        let envelope: ApiEnvelope<Member> = Self::parse_response(response).await?;
        envelope.into_data("Anggota tidak ditemukan")
    }

    /// `POST /api/admin/anggota`
    pub async fn add_member(&self, member: &NewMember) -> Result<Ack, ClientError> {
        let response = self
            .authorized(Method::POST, &["api", "admin", "anggota"])?
            .json(member)
            .send()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> = Self::parse_response(response).await?;
        envelope.into_ack("Gagal menambahkan anggota")
    }

    /// `PUT /api/admin/anggota/{nim}`
    pub async fn update_member(&self, nim: &str, update: &MemberUpdate) -> Result<Ack, ClientError> {
        let response = self
            .authorized(Method::PUT, &["api", "admin", "anggota", nim])?
            .json(update)
            .send()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> = Self::parse_response(response).await?;
        envelope.into_ack("Gagal memperbarui anggota")
    }

    /// `DELETE /api/admin/anggota/{nim}`
    pub async fn delete_member(&self, nim: &str) -> Result<Ack, ClientError> {
        let response = self
            .authorized(Method::DELETE, &["api", "admin", "anggota", nim])?
            .send()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> = Self::parse_response(response).await?;
        envelope.into_ack("Gagal menghapus anggota")
    }
}
