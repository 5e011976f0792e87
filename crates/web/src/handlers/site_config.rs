//! Website configuration editor and taxonomy (jenis) management.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use fivetv_client::BackendClient;
use fivetv_core::jenis::validate_jenis_form;
use fivetv_core::site_config::{validate_website_config_form, WebsiteConfigData};
use fivetv_core::upload::{ConfigSlot, UploadKind};
use serde::Deserialize;

use super::form::MultipartForm;
use super::{form_errors, store_image};
use crate::error::AppResult;
use crate::notice::{with_notice, NoticeQuery};
use crate::render::{admin_context, render};
use crate::session::AdminSession;
use crate::state::AppState;

const EDIT_PATH: &str = "/admin/edit";

#[derive(Debug, Default, Deserialize)]
pub struct JenisForm {
    #[serde(default)]
    pub nama: String,
}

/// Everything the config page can show besides the stored values.
#[derive(Debug, Default)]
struct PageState {
    config_errors: Vec<String>,
    jenis_nama: String,
    jenis_errors: Vec<String>,
    notice: Option<String>,
}

/// GET /admin/edit
pub async fn edit_form(
    State(state): State<AppState>,
    session: AdminSession,
    Query(query): Query<NoticeQuery>,
) -> AppResult<Response> {
    let api = session.api(&state);
    let mut page = PageState {
        notice: query.into_notice(),
        ..PageState::default()
    };

    let data = match api.website_config().await {
        Ok(config) => config.data,
        Err(e) if e.is_auth_failure() => return Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load website config");
            page.notice = Some("Gagal memuat konfigurasi website".to_string());
            WebsiteConfigData::default()
        }
    };

    render_page(&state, &api, &data, page).await
}

/// POST /admin/edit
///
/// Uploaded banner/struktur images replace the stored ones; the old objects,
/// read from the stored config, are deleted best-effort after the config is
/// saved.
pub async fn update(
    State(state): State<AppState>,
    session: AdminSession,
    multipart: Multipart,
) -> AppResult<Response> {
    let api = session.api(&state);
    let submitted = MultipartForm::read(multipart).await?;
    let mut data = config_data(&submitted);

    let result: AppResult<Vec<String>> = async {
        validate_website_config_form(&data)?;

        let mut slots = Vec::new();
        for (field, slot) in [("banner", ConfigSlot::Banner), ("struktur", ConfigSlot::Struktur)] {
            if let Some(file) = submitted.file(field) {
                let url = store_image(&state, &UploadKind::ConfigImage(slot), file).await?;
                match slot {
                    ConfigSlot::Banner => data.banner = url,
                    ConfigSlot::Struktur => data.struktur = url,
                }
                slots.push(slot);
            }
        }
        let replaced = stored_images(&api, &slots).await?;

        api.update_website_config(&data).await?;
        Ok(replaced)
    }
    .await;

    match result {
        Ok(replaced) => {
            for old in replaced {
                state.storage.remove_public_url(&old).await;
            }
            tracing::info!("Website config updated");
            Ok(Redirect::to(&with_notice(EDIT_PATH, "Konfigurasi website berhasil disimpan!")).into_response())
        }
        Err(e) => {
            let page = PageState {
                config_errors: form_errors(e)?,
                ..PageState::default()
            };
            render_page(&state, &api, &data, page).await
        }
    }
}

/// POST /admin/jenis
pub async fn add_jenis(
    State(state): State<AppState>,
    session: AdminSession,
    Form(form): Form<JenisForm>,
) -> AppResult<Response> {
    let api = session.api(&state);

    let result: AppResult<()> = async {
        validate_jenis_form(&form.nama)?;
        api.add_jenis(&form.nama).await?;
        Ok(())
    }
    .await;

    match result {
        Ok(()) => {
            tracing::info!(nama = %form.nama.trim(), "Jenis added");
            Ok(Redirect::to(&with_notice(EDIT_PATH, "Jenis berhasil ditambahkan!")).into_response())
        }
        Err(e) => {
            let jenis_errors = form_errors(e)?;
            let data = match api.website_config().await {
                Ok(config) => config.data,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load website config");
                    WebsiteConfigData::default()
                }
            };
            let page = PageState {
                jenis_nama: form.nama,
                jenis_errors,
                ..PageState::default()
            };
            render_page(&state, &api, &data, page).await
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Stored image links for the slots being replaced. A failed lookup leaves
/// nothing to delete.
async fn stored_images(api: &BackendClient, slots: &[ConfigSlot]) -> AppResult<Vec<String>> {
    if slots.is_empty() {
        return Ok(Vec::new());
    }
    let stored = match api.website_config().await {
        Ok(config) => config.data,
        Err(e) if e.is_auth_failure() => return Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, "Could not look up stored config images");
            return Ok(Vec::new());
        }
    };
    Ok(slots
        .iter()
        .map(|slot| match slot {
            ConfigSlot::Banner => stored.banner.clone(),
            ConfigSlot::Struktur => stored.struktur.clone(),
        })
        .collect())
}

/// Config values from the submitted form. Image fields start as the
/// currently stored links carried in hidden inputs.
fn config_data(submitted: &MultipartForm) -> WebsiteConfigData {
    WebsiteConfigData {
        desc_satu: submitted.text("desc_satu"),
        desc_dua: submitted.text("desc_dua"),
        visi: submitted.text("visi"),
        misi: submitted.text("misi"),
        struktur: submitted.text("current_struktur"),
        instagram: submitted.text("instagram").trim().to_string(),
        twitter: submitted.text("twitter").trim().to_string(),
        youtube: submitted.text("youtube").trim().to_string(),
        tiktok: submitted.text("tiktok").trim().to_string(),
        linkedin: submitted.text("linkedin").trim().to_string(),
        banner: submitted.text("current_banner"),
        konten_i_id: submitted.text("konten_i_id").trim().to_string(),
        konten_ii_id: submitted.text("konten_ii_id").trim().to_string(),
        konten_iii_id: submitted.text("konten_iii_id").trim().to_string(),
    }
}

async fn render_page(
    state: &AppState,
    api: &BackendClient,
    data: &WebsiteConfigData,
    page: PageState,
) -> AppResult<Response> {
    let mut notice = page.notice;
    let jenis = match api.list_jenis_required().await {
        Ok(jenis) => jenis,
        Err(e) if e.is_auth_failure() => return Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load jenis list");
            notice.get_or_insert_with(|| "Gagal memuat daftar jenis".to_string());
            Vec::new()
        }
    };

    let failed = !page.config_errors.is_empty() || !page.jenis_errors.is_empty();

    let mut context = admin_context("edit", notice);
    context.insert("config", data);
    context.insert("config_errors", &page.config_errors);
    context.insert("jenis_list", &jenis);
    context.insert("jenis_nama", &page.jenis_nama);
    context.insert("jenis_errors", &page.jenis_errors);

    let status = if failed {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };
    Ok((status, render(state, "admin/config.html", &context)?).into_response())
}
