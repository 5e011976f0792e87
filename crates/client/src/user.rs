//! Public reader endpoints under `/api/user`. No token is ever sent.

use fivetv_core::dashboard::{
    ArtikelResponse, DashboardResponse, DetailResponse, ProfileResponse, ProgramResponse,
};
use fivetv_core::konten::Konten;
use fivetv_core::pagination::PUBLIC_PAGE_SIZE;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::api::BackendClient;
use crate::error::ClientError;

impl BackendClient {
    /// `GET /api/user/dashboard`
    pub async fn dashboard(&self) -> Result<DashboardResponse, ClientError> {
        self.user_get(&["dashboard"], &[]).await
    }

    /// `GET /api/user/artikel?page=&limit=`
    pub async fn artikel(&self, page: u32, limit: u32) -> Result<ArtikelResponse, ClientError> {
        self.user_get(&["artikel"], &listing_query(page, limit)).await
    }

    /// `GET /api/user/program?page=&limit=`
    pub async fn program(&self, page: u32, limit: u32) -> Result<ProgramResponse, ClientError> {
        self.user_get(&["program"], &listing_query(page, limit)).await
    }

    /// `GET /api/user/konten/{kode}`
    pub async fn detail(&self, kode: &str) -> Result<DetailResponse, ClientError> {
        self.user_get(&["konten", kode], &[]).await
    }

    /// `GET /api/user/profile`
    pub async fn profile(&self) -> Result<ProfileResponse, ClientError> {
        self.user_get(&["profile"], &[]).await
    }

    /// `GET /api/user/search?q=` across both categories.
    pub async fn search(&self, q: &str) -> Result<Vec<Konten>, ClientError> {
        self.user_get(&["search"], &[("q", q.to_string())]).await
    }

    /// `GET /api/user/search/artikel?q=`
    pub async fn search_artikel(&self, q: &str) -> Result<Vec<Konten>, ClientError> {
        self.user_get(&["search", "artikel"], &[("q", q.to_string())])
            .await
    }

    /// `GET /api/user/search/program?q=`
    pub async fn search_program(&self, q: &str) -> Result<Vec<Konten>, ClientError> {
        self.user_get(&["search", "program"], &[("q", q.to_string())])
            .await
    }

    async fn user_get<T: DeserializeOwned>(
        &self,
        path: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let mut segments = vec!["api", "user"];
        segments.extend_from_slice(path);

        let mut request = self.anonymous(Method::GET, &segments)?;
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        Self::parse_response(response).await
    }
}

/// Page 0 is treated as page 1; a zero limit falls back to the default size.
fn listing_query(page: u32, limit: u32) -> Vec<(&'static str, String)> {
    let limit = if limit == 0 { PUBLIC_PAGE_SIZE } else { limit };
    vec![
        ("page", page.max(1).to_string()),
        ("limit", limit.to_string()),
    ]
}
