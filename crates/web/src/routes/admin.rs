//! Route definitions for the admin dashboard, mounted at `/admin`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{anggota, auth, home, konten, site_config};
use crate::state::AppState;

/// Routes mounted at `/admin`. Everything except the login form requires
/// the session cookie.
///
/// ```text
/// GET  /                      -> login_page
/// POST /                      -> login_submit
/// POST /logout                -> logout
/// GET  /home                  -> dashboard (?periode=)
///
/// GET  /artikel               -> konten::list (?column=, ?q=, ?page=)
/// GET  /artikel/tambah        -> konten::new_form
/// POST /artikel/tambah        -> konten::create (multipart)
/// GET  /artikel/{kode}        -> konten::edit_form
/// POST /artikel/{kode}        -> konten::update (multipart)
/// POST /artikel/{kode}/hapus  -> konten::delete
///
/// GET  /anggota               -> anggota::list (?page=, ?edit=)
/// POST /anggota               -> anggota::create (multipart)
/// POST /anggota/{nim}         -> anggota::update (multipart)
/// POST /anggota/{nim}/hapus   -> anggota::delete
///
/// GET  /edit                  -> site_config::edit_form
/// POST /edit                  -> site_config::update (multipart)
/// POST /jenis                 -> site_config::add_jenis
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::login_page).post(auth::login_submit))
        .route("/logout", post(auth::logout))
        .route("/home", get(home::dashboard))
        .route("/artikel", get(konten::list))
        .route("/artikel/tambah", get(konten::new_form).post(konten::create))
        .route("/artikel/{kode}", get(konten::edit_form).post(konten::update))
        .route("/artikel/{kode}/hapus", post(konten::delete))
        .route("/anggota", get(anggota::list).post(anggota::create))
        .route("/anggota/{nim}", post(anggota::update))
        .route("/anggota/{nim}/hapus", post(anggota::delete))
        .route("/edit", get(site_config::edit_form).post(site_config::update))
        .route("/jenis", post(site_config::add_jenis))
}
