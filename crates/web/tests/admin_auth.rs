//! Admin login, logout and the session gate.

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use common::{body_text, get_admin, get_page, location, post_form, set_cookie};

const LOGIN_REQUIRED_REDIRECT: &str =
    "/admin?notice=Authentication+required.+Please+login+first.";

fn login_backend() -> Router {
    Router::new().route(
        "/api/admin/login",
        post(|Json(body): Json<Value>| async move {
            if body["password"] == "rahasia" {
                (
                    StatusCode::OK,
                    Json(json!({ "message": "ok", "token": "tok-1", "email": body["email"] })),
                )
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "message": "Email atau password salah" })),
                )
            }
        }),
    )
}

#[tokio::test]
async fn login_page_renders_form() {
    let app = common::app_with_backend(Router::new()).await;
    let response = get_page(app, "/admin").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("name=\"email\""));
    assert!(html.contains("name=\"password\""));
    assert!(html.contains(".disabled=true"));
}

#[tokio::test]
async fn login_page_shows_notice() {
    let app = common::app_with_backend(Router::new()).await;
    let html = body_text(get_page(app, "/admin?notice=Anda+telah+keluar.").await).await;

    assert!(html.contains("Anda telah keluar."));
}

#[tokio::test]
async fn logged_in_admin_skips_login_page() {
    let app = common::app_with_backend(Router::new()).await;
    let response = get_admin(app, "/admin").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/home");
}

#[tokio::test]
async fn token_separators_are_encoded_in_cookie() {
    let backend = Router::new().route(
        "/api/admin/login",
        post(|| async { Json(json!({ "message": "ok", "token": "abc; Domain=evil.test" })) }),
    );
    let app = common::app_with_backend(backend).await;
    let response = post_form(
        app,
        "/admin",
        "email=admin%40fivetv.id&password=rahasia",
        false,
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = set_cookie(&response).unwrap();
    assert!(cookie.starts_with("adminToken=abc%3B"));
    assert!(!cookie.contains("; Domain"));
}

#[tokio::test]
async fn successful_login_sets_cookie_and_redirects() {
    let app = common::app_with_backend(login_backend()).await;
    let response = post_form(
        app,
        "/admin",
        "email=admin%40fivetv.id&password=rahasia",
        false,
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/home?notice=Login+berhasil%21");
    let cookie = set_cookie(&response).unwrap();
    assert!(cookie.starts_with("adminToken=tok-1"));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn rejected_login_rerenders_with_message() {
    let app = common::app_with_backend(login_backend()).await;
    let response = post_form(app, "/admin", "email=admin%40fivetv.id&password=salah", false).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie(&response).is_none());
    let html = body_text(response).await;
    assert!(html.contains("Email atau password salah"));
    assert!(html.contains("admin@fivetv.id"));
}

#[tokio::test]
async fn invalid_form_is_rejected_before_backend() {
    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();
    let backend = Router::new().route(
        "/api/admin/login",
        post(move || {
            flag.store(true, Ordering::SeqCst);
            async { Json(json!({ "token": "tok-1" })) }
        }),
    );
    let app = common::app_with_backend(backend).await;
    let response = post_form(app, "/admin", "email=bukan-email&password=", false).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(!called.load(Ordering::SeqCst));
    let html = body_text(response).await;
    assert!(html.contains("Email tidak valid"));
    assert!(html.contains("Password harus diisi"));
}

#[tokio::test]
async fn unreachable_backend_reports_network_error() {
    let app = common::build_test_app(&common::dead_backend().await);
    let response = post_form(app, "/admin", "email=admin%40fivetv.id&password=rahasia", false).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_text(response).await.contains("Terjadi kesalahan jaringan."));
}

#[tokio::test]
async fn admin_pages_require_session() {
    for uri in ["/admin/home", "/admin/artikel", "/admin/anggota", "/admin/edit"] {
        let app = common::app_with_backend(Router::new()).await;
        let response = get_page(app, uri).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response), LOGIN_REQUIRED_REDIRECT, "{uri}");
    }
}

#[tokio::test]
async fn backend_401_clears_session() {
    let backend = Router::new().route(
        "/api/admin/konten",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "message": "expired" }))) }),
    );
    let app = common::app_with_backend(backend).await;
    let response = get_admin(app, "/admin/artikel").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), LOGIN_REQUIRED_REDIRECT);
    assert!(set_cookie(&response).unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn backend_403_clears_session() {
    let backend = Router::new().route(
        "/api/admin/anggota",
        get(|| async { (StatusCode::FORBIDDEN, Json(json!({ "message": "forbidden" }))) }),
    );
    let app = common::app_with_backend(backend).await;
    let response = get_admin(app, "/admin/anggota").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), LOGIN_REQUIRED_REDIRECT);
}

#[tokio::test]
async fn logout_clears_cookie() {
    let app = common::app_with_backend(Router::new()).await;
    let response = post_form(app, "/admin/logout", "", true).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin?notice=Anda+telah+keluar.");
    let cookie = set_cookie(&response).unwrap();
    assert!(cookie.starts_with("adminToken=;"));
    assert!(cookie.contains("Max-Age=0"));
}
