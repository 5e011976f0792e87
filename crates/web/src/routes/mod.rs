pub mod admin;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree (without middleware).
///
/// ```text
/// /health             health check (JSON)
/// /, /artikel, ...    public reader site
/// /admin/...          admin dashboard
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(public::router())
        .nest("/admin", admin::router())
}
