//! Route definitions for the public reader site.

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

const STYLESHEET: &str = include_str!("../../static/site.css");

/// Public routes.
///
/// ```text
/// GET /                   -> home (?q=)
/// GET /artikel            -> artikel_list (?page=, ?q=)
/// GET /artikel/{kode}     -> artikel_detail
/// GET /program            -> program_list (?page=, ?q=)
/// GET /program/{kode}     -> program_detail
/// GET /profile            -> profile
/// GET /static/site.css    -> stylesheet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(public::home))
        .route("/artikel", get(public::artikel_list))
        .route("/artikel/{kode}", get(public::artikel_detail))
        .route("/program", get(public::program_list))
        .route("/program/{kode}", get(public::program_detail))
        .route("/profile", get(public::profile))
        .route("/static/site.css", get(stylesheet))
}

async fn stylesheet() -> impl axum::response::IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/css; charset=utf-8"),
            (CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET,
    )
}
