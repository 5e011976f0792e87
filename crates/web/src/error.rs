use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use fivetv_client::ClientError;
use fivetv_core::error::CoreError;

use crate::session;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`ClientError`] and adds HTTP-specific variants.
/// Implements [`IntoResponse`]: authentication failures become a redirect
/// to the login page, everything else a small HTML error page. Internal
/// details are logged and never shown.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fivetv_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A backend API or storage error from `fivetv_client`.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "Terjadi kesalahan pada server. Silakan coba lagi nanti.";
const UNAVAILABLE_MESSAGE: &str = "Layanan sedang tidak tersedia. Silakan coba lagi nanti.";
const NOT_FOUND_MESSAGE: &str = "Data tidak ditemukan";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- Authentication ---
            AppError::Core(CoreError::Unauthorized(_)) => return session::login_redirect(),
            AppError::Client(err) if err.is_auth_failure() => {
                tracing::info!(error = %err, "Backend rejected session");
                return session::login_redirect();
            }

            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { entity, key }) => {
                tracing::debug!(entity, key = %key, "Not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }

            // --- Backend errors ---
            AppError::Client(ClientError::Api { status: 404, .. }) => {
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            AppError::Client(ClientError::Api { status, message }) if *status < 500 => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST),
                message.clone(),
            ),
            AppError::Client(ClientError::Rejected(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            AppError::Client(ClientError::Invalid(core)) => {
                (StatusCode::BAD_REQUEST, core.form_errors().join(" "))
            }
            AppError::Client(err) => {
                tracing::error!(error = %err, "Backend error");
                (StatusCode::BAD_GATEWAY, UNAVAILABLE_MESSAGE.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Template(err) => {
                tracing::error!(error = ?err, "Template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        (status, Html(error_page(status, &message))).into_response()
    }
}

/// Standalone error page. Rendered without the template set so it works
/// even when templating itself failed.
fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{code} | FiveTv</title>\n<link rel=\"stylesheet\" href=\"/static/site.css\">\n\
         </head>\n<body class=\"error-page\">\n<main>\n<h1>{code}</h1>\n<p>{message}</p>\n\
         <a href=\"/\">Kembali ke beranda</a>\n</main>\n</body>\n</html>\n",
        code = status.as_u16(),
        message = tera::escape_html(message),
    )
}
