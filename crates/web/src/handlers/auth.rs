//! Admin login and logout.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use fivetv_client::admin::LoginOutcome;
use fivetv_core::auth::LoginForm;

use crate::error::AppResult;
use crate::notice::{with_notice, NoticeQuery};
use crate::render::{admin_context, render};
use crate::session::{session_cookie, session_token};
use crate::state::AppState;

/// GET /admin
///
/// Already logged-in admins go straight to the dashboard.
pub async fn login_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<NoticeQuery>,
) -> AppResult<Response> {
    if session_token(&jar).is_some() {
        return Ok(Redirect::to("/admin/home").into_response());
    }

    let mut context = admin_context("login", query.into_notice());
    context.insert("email", "");
    context.insert("errors", &Vec::<String>::new());
    Ok(render(&state, "admin/login.html", &context)?.into_response())
}

/// POST /admin
pub async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    if let Err(e) = form.check() {
        return login_failed(&state, &form.email, e.form_errors());
    }

    match state.api.login(form.email.trim(), &form.password).await {
        LoginOutcome::Success { token, email } => {
            tracing::info!(email = ?email, "Admin logged in");
            Ok((
                jar.add(session_cookie(token)),
                Redirect::to(&with_notice("/admin/home", "Login berhasil!")),
            )
                .into_response())
        }
        LoginOutcome::Failed { message } => {
            tracing::info!(email = %form.email, message = %message, "Admin login rejected");
            login_failed(&state, &form.email, vec![message])
        }
    }
}

fn login_failed(state: &AppState, email: &str, errors: Vec<String>) -> AppResult<Response> {
    let mut context = admin_context("login", None);
    context.insert("email", email);
    context.insert("errors", &errors);
    let page = render(state, "admin/login.html", &context)?;
    Ok((StatusCode::UNAUTHORIZED, page).into_response())
}

/// POST /admin/logout
pub async fn logout(jar: CookieJar) -> Response {
    (
        jar.remove(session_cookie(String::new())),
        Redirect::to(&with_notice("/admin", "Anda telah keluar.")),
    )
        .into_response()
}
