//! Admin session: the backend token kept in an HTTP-only cookie.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use fivetv_client::BackendClient;
use fivetv_core::error::CoreError;

use crate::error::AppError;
use crate::notice::with_notice;
use crate::state::AppState;

/// Name of the cookie holding the backend token.
pub const SESSION_COOKIE: &str = "adminToken";

/// Notice shown on the login page after an auth redirect.
pub const LOGIN_REQUIRED: &str = "Authentication required. Please login first.";

/// Logged-in admin, extracted from the session cookie.
///
/// Handlers that take this extractor are only reached with a token; without
/// one the request is redirected to the login page.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
}

impl AdminSession {
    /// Backend client authorized with this session's token.
    pub fn api(&self, state: &AppState) -> BackendClient {
        state.api.with_token(&self.token)
    }
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
        })?;
        Ok(AdminSession { token })
    }
}

/// Session token carried by the request, if any. An empty value counts as
/// logged out.
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Cookie that stores the token for the browser session.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build()
}

/// Cookie that makes the browser drop the token.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = session_cookie(String::new());
    cookie.make_removal();
    cookie
}

/// Drop the session and send the browser to the login page.
pub fn login_redirect() -> Response {
    (
        CookieJar::new().add(removal_cookie()),
        Redirect::to(&with_notice("/admin", LOGIN_REQUIRED)),
    )
        .into_response()
}
