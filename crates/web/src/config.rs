use fivetv_client::storage::DEFAULT_BUCKET;
use fivetv_client::StorageSettings;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development against a
/// backend on `localhost:8080`. In production, override via environment
/// variables (a `.env` file is read at startup).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the backend REST API.
    pub api_base_url: String,
    /// Object storage connection settings.
    pub storage: StorageSettings,
    /// Maximum accepted request body, covering multipart uploads.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `API_BASE_URL`         | `http://localhost:8080`    |
    /// | `STORAGE_URL`          | (unset)                    |
    /// | `STORAGE_ANON_KEY`     | (unset)                    |
    /// | `STORAGE_SERVICE_KEY`  | (unset)                    |
    /// | `STORAGE_BUCKET`       | `FiveTv`                   |
    /// | `MAX_UPLOAD_BYTES`     | `12582912` (12 MiB)        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let api_base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".into());

        let storage = StorageSettings {
            url: std::env::var("STORAGE_URL").ok(),
            anon_key: std::env::var("STORAGE_ANON_KEY").ok(),
            service_key: std::env::var("STORAGE_SERVICE_KEY").ok(),
            bucket: Some(std::env::var("STORAGE_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.into())),
        };

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "12582912".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            request_timeout_secs,
            api_base_url,
            storage,
            max_upload_bytes,
        }
    }
}
