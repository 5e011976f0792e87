//! Admin article (content) table and editor.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use fivetv_client::BackendClient;
use fivetv_core::konten::{validate_article_form, ArticleForm, ArticlePayload, Kategori};
use fivetv_core::pagination::{paginate, ADMIN_PAGE_SIZE};
use fivetv_core::search::{SearchColumn, SearchKontenParams};
use fivetv_core::upload::UploadKind;
use serde::{Deserialize, Serialize};

use super::form::MultipartForm;
use super::{form_errors, store_image};
use crate::error::{AppError, AppResult};
use crate::notice::with_notice;
use crate::render::{admin_context, render};
use crate::session::AdminSession;
use crate::state::AppState;

const LIST_PATH: &str = "/admin/artikel";

#[derive(Debug, Default, Deserialize)]
pub struct KontenListQuery {
    pub column: Option<String>,
    pub q: Option<String>,
    pub page: Option<usize>,
    pub notice: Option<String>,
}

/// One row of the content table.
#[derive(Debug, Clone, Serialize)]
struct KontenRow {
    kode: String,
    penulis: String,
    judul: String,
    tanggal: String,
    jenis: String,
    kategori: &'static str,
    view: i64,
    view_month: i64,
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// GET /admin/artikel
pub async fn list(
    State(state): State<AppState>,
    session: AdminSession,
    Query(query): Query<KontenListQuery>,
) -> AppResult<Response> {
    let api = session.api(&state);
    let q = query.q.unwrap_or_default();
    let params = SearchKontenParams::from_selection(query.column.as_deref(), &q);

    let items = if params.is_empty() {
        api.list_konten().await?
    } else {
        api.search_konten(&params).await?
    };

    let rows: Vec<KontenRow> = items
        .iter()
        .map(|item| KontenRow {
            kode: item.kode_konten.clone(),
            penulis: item.penulis.clone(),
            judul: item.judul.clone(),
            tanggal: item.tanggal.clone(),
            jenis: item.jenis_nama().to_string(),
            kategori: item.kategori.label(),
            view: item.view,
            view_month: item.view_month,
        })
        .collect();
    let page = paginate(&rows, query.page.unwrap_or(1), ADMIN_PAGE_SIZE);

    let mut filter = url::form_urlencoded::Serializer::new(String::new());
    if let Some(column) = query.column.as_deref().filter(|c| !c.is_empty()) {
        filter.append_pair("column", column);
    }
    if !q.is_empty() {
        filter.append_pair("q", &q);
    }

    let columns: Vec<&str> = SearchColumn::ALL.iter().map(|c| c.name()).collect();

    let mut context = admin_context("artikel", query.notice);
    context.insert("page", &page);
    context.insert("window", &page.window());
    context.insert("has_prev", &page.has_prev());
    context.insert("has_next", &page.has_next());
    context.insert("prev_page", &page.prev_page());
    context.insert("next_page", &page.next_page());
    context.insert("filter_query", &filter.finish());
    context.insert("columns", &columns);
    context.insert("column", &query.column.unwrap_or_default());
    context.insert("q", &q);
    Ok(render(&state, "admin/konten.html", &context)?.into_response())
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// GET /admin/artikel/tambah
pub async fn new_form(State(state): State<AppState>, session: AdminSession) -> AppResult<Response> {
    let api = session.api(&state);
    render_form(&state, &api, FormTarget::Create, &ArticleForm::default(), None, Vec::new()).await
}

/// POST /admin/artikel/tambah
pub async fn create(
    State(state): State<AppState>,
    session: AdminSession,
    multipart: Multipart,
) -> AppResult<Response> {
    let api = session.api(&state);
    let submitted = MultipartForm::read(multipart).await?;
    let form = article_form(&submitted);

    let result: AppResult<()> = async {
        validate_article_form(&form)?;
        let link_gambar = match submitted.file("cover") {
            Some(file) => Some(store_image(&state, &UploadKind::ArticleCover, file).await?),
            None => None,
        };
        api.create_konten(&ArticlePayload::from_form(&form, link_gambar))
            .await?;
        Ok(())
    }
    .await;

    match result {
        Ok(()) => {
            tracing::info!(judul = %form.title, "Article created");
            Ok(Redirect::to(&with_notice(LIST_PATH, "Artikel berhasil ditambahkan!")).into_response())
        }
        Err(e) => {
            let errors = form_errors(e)?;
            render_form(&state, &api, FormTarget::Create, &form, None, errors).await
        }
    }
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// GET /admin/artikel/{kode}
pub async fn edit_form(
    State(state): State<AppState>,
    session: AdminSession,
    Path(kode): Path<String>,
) -> AppResult<Response> {
    let api = session.api(&state);
    let detail = match api.get_konten(&kode).await {
        Ok(detail) => detail,
        Err(e) if e.is_auth_failure() => return Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, kode = %kode, "Failed to load article");
            return Ok(Redirect::to(&with_notice(
                LIST_PATH,
                "Artikel tidak ditemukan atau gagal dimuat",
            ))
            .into_response());
        }
    };

    let form = ArticleForm::from_detail(&detail);
    render_form(
        &state,
        &api,
        FormTarget::Edit(&kode),
        &form,
        detail.item.link_gambar.as_deref(),
        Vec::new(),
    )
    .await
}

/// POST /admin/artikel/{kode}
///
/// The stored cover is kept unless a new file is uploaded; a replaced cover
/// is removed from storage after the update succeeds. The current cover is
/// always read from the stored article.
pub async fn update(
    State(state): State<AppState>,
    session: AdminSession,
    Path(kode): Path<String>,
    multipart: Multipart,
) -> AppResult<Response> {
    let api = session.api(&state);
    let submitted = MultipartForm::read(multipart).await?;
    let form = article_form(&submitted);
    let current_image = match api.get_konten(&kode).await {
        Ok(detail) => detail.item.link_gambar.filter(|s| !s.trim().is_empty()),
        Err(e) if e.is_auth_failure() => return Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, kode = %kode, "Failed to load article before update");
            return Ok(Redirect::to(&with_notice(
                LIST_PATH,
                "Artikel tidak ditemukan atau gagal dimuat",
            ))
            .into_response());
        }
    };

    let result: AppResult<Option<String>> = async {
        validate_article_form(&form)?;
        let new_image = match submitted.file("cover") {
            Some(file) => Some(store_image(&state, &UploadKind::ArticleCover, file).await?),
            None => None,
        };
        let link_gambar = new_image.clone().or_else(|| current_image.clone());
        api.update_konten(&kode, &ArticlePayload::from_form(&form, link_gambar))
            .await?;
        Ok(new_image)
    }
    .await;

    match result {
        Ok(new_image) => {
            if let (Some(_), Some(old)) = (new_image, current_image.as_deref()) {
                state.storage.remove_public_url(old).await;
            }
            tracing::info!(kode = %kode, "Article updated");
            Ok(Redirect::to(&with_notice(LIST_PATH, "Artikel berhasil diperbarui!")).into_response())
        }
        Err(e) => {
            let errors = form_errors(e)?;
            render_form(
                &state,
                &api,
                FormTarget::Edit(&kode),
                &form,
                current_image.as_deref(),
                errors,
            )
            .await
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// POST /admin/artikel/{kode}/hapus
pub async fn delete(
    State(state): State<AppState>,
    session: AdminSession,
    Path(kode): Path<String>,
) -> AppResult<Response> {
    let notice = match session.api(&state).delete_konten(&kode).await {
        Ok(_) => {
            tracing::info!(kode = %kode, "Article deleted");
            "Artikel berhasil dihapus!".to_string()
        }
        Err(e) if e.is_auth_failure() => return Err(AppError::Client(e)),
        Err(e) => {
            tracing::warn!(error = %e, kode = %kode, "Failed to delete article");
            format!("Gagal menghapus artikel: {e}")
        }
    };
    Ok(Redirect::to(&with_notice(LIST_PATH, &notice)).into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum FormTarget<'a> {
    Create,
    Edit(&'a str),
}

fn article_form(submitted: &MultipartForm) -> ArticleForm {
    ArticleForm {
        title: submitted.text("title"),
        source: submitted.text("source"),
        reporter: submitted.text("reporter"),
        editor: submitted.text("editor"),
        category: Kategori::from_name(submitted.text("category").trim()).unwrap_or_default(),
        jenis_id: submitted.number("jenis_id"),
        content: submitted.text("content"),
    }
}

/// Render the editor; a non-empty `errors` list means a rejected submission.
async fn render_form(
    state: &AppState,
    api: &BackendClient,
    target: FormTarget<'_>,
    form: &ArticleForm,
    current_image: Option<&str>,
    errors: Vec<String>,
) -> AppResult<Response> {
    let jenis = match api.list_jenis().await {
        Ok(jenis) => jenis,
        Err(e) if e.is_auth_failure() => return Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load jenis options");
            Vec::new()
        }
    };

    let (action, kode, heading) = match target {
        FormTarget::Create => ("/admin/artikel/tambah".to_string(), None, "Tambah Artikel"),
        FormTarget::Edit(kode) => (format!("{LIST_PATH}/{kode}"), Some(kode), "Edit Artikel"),
    };

    let mut context = admin_context("artikel", None);
    context.insert("heading", heading);
    context.insert("action", &action);
    context.insert("kode", &kode);
    context.insert("form", form);
    context.insert("category", form.category.as_str());
    context.insert("jenis_options", &jenis);
    context.insert("current_image", &current_image);
    context.insert("errors", &errors);

    let status = if errors.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    Ok((status, render(state, "admin/konten_form.html", &context)?).into_response())
}
