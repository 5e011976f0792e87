//! Admin member (anggota) table with add and edit forms.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use fivetv_client::BackendClient;
use fivetv_core::member::{validate_member_form, Member, MemberForm, MemberUpdate, NewMember};
use fivetv_core::pagination::{paginate, ADMIN_PAGE_SIZE};
use fivetv_core::upload::UploadKind;
use serde::{Deserialize, Serialize};

use super::form::MultipartForm;
use super::{form_errors, store_image};
use crate::error::{AppError, AppResult};
use crate::notice::with_notice;
use crate::render::{admin_context, render};
use crate::session::AdminSession;
use crate::state::AppState;

const LIST_PATH: &str = "/admin/anggota";

#[derive(Debug, Default, Deserialize)]
pub struct AnggotaQuery {
    pub page: Option<usize>,
    /// NIM of the member whose edit form is open.
    pub edit: Option<String>,
    pub notice: Option<String>,
}

/// State of the member form shown under the table.
#[derive(Debug, Serialize)]
struct Editor {
    /// `"add"` or `"edit"`.
    mode: &'static str,
    action: String,
    form: MemberForm,
    current_photo: Option<String>,
    errors: Vec<String>,
}

impl Editor {
    fn add(form: MemberForm, errors: Vec<String>) -> Self {
        Self {
            mode: "add",
            action: LIST_PATH.to_string(),
            form,
            current_photo: None,
            errors,
        }
    }

    fn edit(nim: &str, form: MemberForm, current_photo: Option<String>, errors: Vec<String>) -> Self {
        Self {
            mode: "edit",
            action: format!("{LIST_PATH}/{nim}"),
            form,
            current_photo,
            errors,
        }
    }
}

/// GET /admin/anggota
pub async fn list(
    State(state): State<AppState>,
    session: AdminSession,
    Query(query): Query<AnggotaQuery>,
) -> AppResult<Response> {
    let api = session.api(&state);
    let mut notice = query.notice;

    let editor = match query.edit.as_deref().filter(|n| !n.trim().is_empty()) {
        None => Editor::add(MemberForm::default(), Vec::new()),
        Some(nim) => match api.get_member(nim).await {
            Ok(member) => Editor::edit(
                nim,
                MemberForm::from_member(&member),
                member.foto_link.clone(),
                Vec::new(),
            ),
            Err(e) if e.is_auth_failure() => return Err(e.into()),
            Err(e) => {
                tracing::warn!(error = %e, nim, "Failed to load member");
                notice = Some("Gagal memuat data anggota".to_string());
                Editor::add(MemberForm::default(), Vec::new())
            }
        },
    };

    render_page(&state, &api, query.page.unwrap_or(1), editor, notice).await
}

/// POST /admin/anggota
pub async fn create(
    State(state): State<AppState>,
    session: AdminSession,
    multipart: Multipart,
) -> AppResult<Response> {
    let api = session.api(&state);
    let submitted = MultipartForm::read(multipart).await?;
    let form = member_form(&submitted);

    let result: AppResult<()> = async {
        validate_member_form(&form)?;
        let foto_link = match submitted.file("foto") {
            Some(file) => {
                let kind = UploadKind::MemberPhoto {
                    nim: form.nim.clone(),
                };
                Some(store_image(&state, &kind, file).await?)
            }
            None => None,
        };
        api.add_member(&NewMember::from_form(&form, foto_link)).await?;
        Ok(())
    }
    .await;

    match result {
        Ok(()) => {
            tracing::info!(nim = %form.nim, "Member added");
            Ok(Redirect::to(&with_notice(LIST_PATH, "Anggota baru berhasil ditambahkan!")).into_response())
        }
        Err(e) => {
            let errors = form_errors(e)?;
            render_page(&state, &api, 1, Editor::add(form, errors), None).await
        }
    }
}

/// POST /admin/anggota/{nim}
///
/// A new photo replaces the stored one; the old object is deleted
/// best-effort once the update has gone through.
pub async fn update(
    State(state): State<AppState>,
    session: AdminSession,
    Path(nim): Path<String>,
    multipart: Multipart,
) -> AppResult<Response> {
    let api = session.api(&state);
    let submitted = MultipartForm::read(multipart).await?;
    let mut form = member_form(&submitted);
    form.nim = nim.clone();
    let current_photo = stored_photo(&api, &nim).await?;

    let result: AppResult<Option<String>> = async {
        validate_member_form(&form)?;
        let new_photo = match submitted.file("foto") {
            Some(file) => {
                let kind = UploadKind::MemberPhoto { nim: nim.clone() };
                Some(store_image(&state, &kind, file).await?)
            }
            None => None,
        };
        api.update_member(&nim, &MemberUpdate::from_form(&form, new_photo.clone()))
            .await?;
        Ok(new_photo)
    }
    .await;

    match result {
        Ok(new_photo) => {
            if let (Some(_), Some(old)) = (new_photo, current_photo.as_deref()) {
                state.storage.remove_public_url(old).await;
            }
            tracing::info!(nim = %nim, "Member updated");
            Ok(Redirect::to(&with_notice(LIST_PATH, "Data anggota berhasil diperbarui!")).into_response())
        }
        Err(e) => {
            let errors = form_errors(e)?;
            let editor = Editor::edit(&nim, form, current_photo, errors);
            render_page(&state, &api, 1, editor, None).await
        }
    }
}

/// POST /admin/anggota/{nim}/hapus
pub async fn delete(
    State(state): State<AppState>,
    session: AdminSession,
    Path(nim): Path<String>,
) -> AppResult<Response> {
    let api = session.api(&state);

    let photo = stored_photo(&api, &nim).await?;

    let notice = match api.delete_member(&nim).await {
        Ok(_) => {
            if let Some(photo) = photo.as_deref() {
                state.storage.remove_public_url(photo).await;
            }
            tracing::info!(nim = %nim, "Member deleted");
            "Anggota berhasil dihapus!"
        }
        Err(e) if e.is_auth_failure() => return Err(AppError::Client(e)),
        Err(e) => {
            tracing::warn!(error = %e, nim = %nim, "Failed to delete member");
            "Gagal menghapus anggota"
        }
    };
    Ok(Redirect::to(&with_notice(LIST_PATH, notice)).into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Photo link of the stored member. Lookup failures other than an expired
/// session leave nothing to replace.
async fn stored_photo(api: &BackendClient, nim: &str) -> AppResult<Option<String>> {
    match api.get_member(nim).await {
        Ok(member) => Ok(member.foto_link.filter(|s| !s.trim().is_empty())),
        Err(e) if e.is_auth_failure() => Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, nim = %nim, "Could not look up stored member photo");
            Ok(None)
        }
    }
}

fn member_form(submitted: &MultipartForm) -> MemberForm {
    MemberForm {
        nama: submitted.text("nama"),
        nim: submitted.text("nim"),
        prodi: submitted.text("prodi"),
        jabatan: submitted.text("jabatan"),
        divisi: submitted.text("divisi"),
        linkedin: submitted.text("linkedin"),
        instagram: submitted.text("instagram"),
    }
}

async fn render_page(
    state: &AppState,
    api: &BackendClient,
    page: usize,
    editor: Editor,
    notice: Option<String>,
) -> AppResult<Response> {
    let members = match api.list_members().await {
        Ok(members) => members,
        Err(e) if e.is_auth_failure() => return Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load members");
            return render_with(state, Vec::new(), page, editor, Some("Gagal memuat data anggota".into()));
        }
    };
    render_with(state, members, page, editor, notice)
}

fn render_with(
    state: &AppState,
    members: Vec<Member>,
    page: usize,
    editor: Editor,
    notice: Option<String>,
) -> AppResult<Response> {
    let page = paginate(&members, page, ADMIN_PAGE_SIZE);
    let offset = (page.page - 1) * page.per_page;

    let mut context = admin_context("anggota", notice);
    context.insert("page", &page);
    context.insert("offset", &offset);
    context.insert("window", &page.window());
    context.insert("has_prev", &page.has_prev());
    context.insert("has_next", &page.has_next());
    context.insert("prev_page", &page.prev_page());
    context.insert("next_page", &page.next_page());
    context.insert("editor", &editor);

    let status = if editor.errors.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    Ok((status, render(state, "admin/anggota.html", &context)?).into_response())
}
