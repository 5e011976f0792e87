//! Admin session and content listing endpoints.

use fivetv_core::dashboard::{DashboardAdminData, Periode};
use fivetv_core::konten::KontenItem;
use fivetv_core::search::SearchKontenParams;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::BackendClient;
use crate::envelope::ApiEnvelope;
use crate::error::ClientError;

/// Message shown when the login request never reached the backend.
pub const NETWORK_ERROR: &str = "Terjadi kesalahan jaringan.";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Result of a login attempt. Failures carry a message for the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { token: String, email: Option<String> },
    Failed { message: String },
}

impl BackendClient {
    /// `POST /api/admin/login`. Never errors; every failure is a
    /// [`LoginOutcome::Failed`].
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        match self.try_login(email, password).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "Login request failed");
                LoginOutcome::Failed {
                    message: NETWORK_ERROR.to_string(),
                }
            }
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<LoginOutcome, ClientError> {
        let response = self
            .anonymous(Method::POST, &["api", "admin", "login"])?
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        let body: LoginResponse = response.json().await.unwrap_or_default();

        match (status.is_success(), body.token) {
            (true, Some(token)) if !token.is_empty() => Ok(LoginOutcome::Success {
                token,
                email: body.email,
            }),
            _ => Ok(LoginOutcome::Failed {
                message: body
                    .message
                    .or(body.error)
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "Login gagal".to_string()),
            }),
        }
    }

    /// `GET /api/admin/dashboard?periode=N`
    pub async fn admin_dashboard(&self, periode: Periode) -> Result<DashboardAdminData, ClientError> {
        let response = self
            .authorized(Method::GET, &["api", "admin", "dashboard"])?
            .query(&[("periode", periode.months())])
            .send()
            .await?;
        let envelope: ApiEnvelope<DashboardAdminData> = Self::parse_response(response).await?;
        envelope.into_data("Gagal memuat data dashboard")
    }

    /// `GET /api/admin/konten`
    pub async fn list_konten(&self) -> Result<Vec<KontenItem>, ClientError> {
        let response = self
            .authorized(Method::GET, &["api", "admin", "konten"])?
            .send()
            .await?;
        let envelope: ApiEnvelope<Vec<KontenItem>> = Self::parse_response(response).await?;
        envelope.into_data("Gagal memuat daftar konten")
    }

    /// `GET /api/admin/search` with only the set parameters.
    pub async fn search_konten(
        &self,
        params: &SearchKontenParams,
    ) -> Result<Vec<KontenItem>, ClientError> {
        let mut request = self.authorized(Method::GET, &["api", "admin", "search"])?;
        let pairs = params.query_pairs();
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }
        let response = request.send().await?;
        let envelope: ApiEnvelope<Vec<KontenItem>> = Self::parse_response(response).await?;
        envelope.into_data("Gagal mencari konten")
    }
}
