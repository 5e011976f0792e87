use fivetv_core::error::CoreError;

/// Errors from the backend API and object storage clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A base URL or endpoint could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The backend answered 401.
    #[error("{0}")]
    Unauthorized(String),

    /// The backend answered 403.
    #[error("{0}")]
    Forbidden(String),

    /// Any other non-2xx status.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
    },

    /// 2xx response whose envelope reported `success: false` or carried no data.
    #[error("{0}")]
    Rejected(String),

    /// An admin call that needs a token was made without one.
    #[error("Authentication token not found. Please login again.")]
    MissingToken,

    /// Object storage misconfiguration or upload failure.
    #[error("{0}")]
    Storage(String),

    /// Input rejected before any request was sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}

impl ClientError {
    /// Whether the session should be dropped and the admin sent back to login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ClientError::Unauthorized(_) | ClientError::Forbidden(_) | ClientError::MissingToken
        )
    }

    /// HTTP status carried by the error, if the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
