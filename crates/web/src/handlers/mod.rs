pub mod anggota;
pub mod auth;
pub mod form;
pub mod home;
pub mod konten;
pub mod public;
pub mod site_config;

use chrono::Utc;
use fivetv_client::ClientError;
use fivetv_core::error::CoreError;
use fivetv_core::upload::{object_path, validate_image, UploadKind};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use form::UploadedFile;

/// Messages to show on a re-rendered form after a failed submission.
///
/// Validation problems and backend refusals become form errors; auth
/// failures and unexpected errors are handed back for [`AppError`]'s
/// response mapping.
pub(crate) fn form_errors(err: AppError) -> AppResult<Vec<String>> {
    match err {
        AppError::Core(core @ CoreError::Validation(_)) => Ok(core.form_errors()),
        AppError::Client(client) if client.is_auth_failure() => Err(AppError::Client(client)),
        AppError::Client(ClientError::Invalid(core)) => Ok(core.form_errors()),
        AppError::Client(ClientError::Rejected(msg)) | AppError::Client(ClientError::Storage(msg)) => {
            Ok(vec![msg])
        }
        AppError::Client(ClientError::Api { status, message }) if status < 500 => Ok(vec![message]),
        AppError::BadRequest(msg) => Ok(vec![msg]),
        other => Err(other),
    }
}

/// Validate an uploaded image, store it and return its public URL.
pub(crate) async fn store_image(
    state: &AppState,
    kind: &UploadKind,
    file: &UploadedFile,
) -> AppResult<String> {
    validate_image(kind, &file.content_type, file.bytes.len())?;

    let nonce = uuid::Uuid::new_v4().simple().to_string();
    let path = object_path(
        kind,
        &file.file_name,
        Utc::now().timestamp_millis(),
        &nonce[..8],
    );
    let url = state
        .storage
        .upload(&path, file.bytes.clone(), &file.content_type)
        .await?;
    tracing::info!(path = %path, "Image stored");
    Ok(url)
}
