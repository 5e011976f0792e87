use std::sync::Arc;
use std::time::Duration;

use fivetv_client::{BackendClient, ClientError, StorageClient};
use tera::Tera;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::render;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the HTTP clients share their connection pools and the
/// template set sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Backend API client without a token; admin handlers derive an
    /// authorized copy from the session.
    pub api: BackendClient,
    pub storage: StorageClient,
    pub templates: Arc<Tera>,
}

impl AppState {
    /// Build clients and compile templates from the loaded configuration.
    pub fn new(config: ServerConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ClientError::from)?;

        let api = BackendClient::with_client(http.clone(), &config.api_base_url)?;
        let storage = StorageClient::with_client(http, config.storage.clone())?;
        if !storage.is_configured() {
            tracing::warn!("Object storage is not configured; image uploads will fail");
        }

        Ok(Self {
            config: Arc::new(config),
            api,
            storage,
            templates: Arc::new(render::build_templates()?),
        })
    }
}
