//! Admin endpoint behaviour against an in-process fake backend.

mod common;

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use fivetv_client::admin::{LoginOutcome, NETWORK_ERROR};
use fivetv_client::{BackendClient, ClientError};
use fivetv_core::dashboard::Periode;
use fivetv_core::search::SearchKontenParams;

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn konten_row(kode: &str, judul: &str) -> Value {
    json!({
        "kodeKonten": kode,
        "penulis": "Admin",
        "judul": judul,
        "view": 3,
        "tanggal": "2025-01-05",
        "kategori": "artikel",
        "jenisId": 1,
        "jenis": { "nama": "Berita" }
    })
}

async fn client_for(router: Router) -> BackendClient {
    let base = common::spawn_backend(router).await;
    BackendClient::new(&base).unwrap()
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_success_returns_token() {
    let router = Router::new().route(
        "/api/admin/login",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["email"], "admin@fivetv.id");
            Json(json!({ "message": "ok", "token": "tok-1", "email": "admin@fivetv.id" }))
        }),
    );
    let client = client_for(router).await;

    let outcome = client.login("admin@fivetv.id", "rahasia").await;
    assert_eq!(
        outcome,
        LoginOutcome::Success {
            token: "tok-1".into(),
            email: Some("admin@fivetv.id".into())
        }
    );
}

#[tokio::test]
async fn login_failure_uses_server_message() {
    let router = Router::new().route(
        "/api/admin/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Email atau password salah" })),
            )
        }),
    );
    let client = client_for(router).await;

    assert_eq!(
        client.login("a@b.c", "x").await,
        LoginOutcome::Failed {
            message: "Email atau password salah".into()
        }
    );
}

#[tokio::test]
async fn login_without_message_says_login_gagal() {
    let router = Router::new().route(
        "/api/admin/login",
        post(|| async { (StatusCode::BAD_REQUEST, "nope") }),
    );
    let client = client_for(router).await;

    assert_eq!(
        client.login("a@b.c", "x").await,
        LoginOutcome::Failed {
            message: "Login gagal".into()
        }
    );
}

#[tokio::test]
async fn login_network_failure_is_reported() {
    let client = BackendClient::new(&common::dead_backend().await).unwrap();
    assert_eq!(
        client.login("a@b.c", "x").await,
        LoginOutcome::Failed {
            message: NETWORK_ERROR.into()
        }
    );
}

// ---------------------------------------------------------------------------
// Authenticated calls
// ---------------------------------------------------------------------------

fn konten_router() -> Router {
    Router::new().route(
        "/api/admin/konten",
        get(|headers: HeaderMap| async move {
            if bearer(&headers).as_deref() != Some("Bearer tok") {
                return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "no" })));
            }
            (
                StatusCode::OK,
                Json(json!({ "success": true, "data": [konten_row("K1", "Festival")] })),
            )
        }),
    )
}

#[tokio::test]
async fn list_konten_sends_bearer_token() {
    let client = client_for(konten_router()).await.with_token("tok");

    let items = client.list_konten().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].kode_konten, "K1");
    assert_eq!(items[0].jenis_nama(), "Berita");
}

#[tokio::test]
async fn missing_token_fails_without_request() {
    let client = client_for(konten_router()).await;
    assert_matches!(client.list_konten().await, Err(ClientError::MissingToken));
}

#[tokio::test]
async fn rejected_token_maps_to_unauthorized() {
    let client = client_for(konten_router()).await.with_token("stale");

    let err = client.list_konten().await.unwrap_err();
    assert_matches!(err, ClientError::Unauthorized(_));
    assert!(err.is_auth_failure());
    assert_eq!(err.to_string(), "Authentication failed. Please login again.");
}

#[tokio::test]
async fn forbidden_maps_to_forbidden() {
    let router = Router::new().route(
        "/api/admin/anggota",
        get(|| async { StatusCode::FORBIDDEN }),
    );
    let client = client_for(router).await.with_token("tok");

    let err = client.list_members().await.unwrap_err();
    assert_matches!(err, ClientError::Forbidden(_));
    assert!(err.is_auth_failure());
}

#[tokio::test]
async fn server_error_carries_body_message() {
    let router = Router::new().route(
        "/api/admin/konten",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Database sedang sibuk" })),
            )
        }),
    );
    let client = client_for(router).await.with_token("tok");

    assert_matches!(
        client.list_konten().await,
        Err(ClientError::Api { status: 500, message }) if message == "Database sedang sibuk"
    );
}

#[tokio::test]
async fn server_error_without_body_reports_status() {
    let router = Router::new().route(
        "/api/admin/konten",
        get(|| async { StatusCode::BAD_GATEWAY }),
    );
    let client = client_for(router).await.with_token("tok");

    let err = client.list_konten().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 502");
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn dashboard_sends_periode() {
    let router = Router::new().route(
        "/api/admin/dashboard",
        get(|uri: Uri| async move {
            assert_eq!(uri.query(), Some("periode=999"));
            Json(json!({
                "success": true,
                "data": {
                    "viewsPerPeriode": { "2025-01": 10 },
                    "totalViewsThisMonth": 4,
                    "totalAllViews": 10,
                    "countArtikel": 2,
                    "countProgram": 1,
                    "mostViewsByJenis": [{ "jenis": "Berita", "totalViews": 10 }]
                }
            }))
        }),
    );
    let client = client_for(router).await.with_token("tok");

    let data = client.admin_dashboard(Periode::All).await.unwrap();
    assert_eq!(data.count_artikel, 2);
    assert_eq!(data.most_views_by_jenis[0].jenis, "Berita");
}

// ---------------------------------------------------------------------------
// Search and content CRUD
// ---------------------------------------------------------------------------

fn echo_query_router() -> Router {
    Router::new().route(
        "/api/admin/search",
        get(|uri: Uri| async move {
            let query = uri.query().unwrap_or("<none>").to_string();
            Json(json!({ "success": true, "data": [konten_row("Q", &query)] }))
        }),
    )
}

#[tokio::test]
async fn search_sends_only_set_params() {
    let client = client_for(echo_query_router()).await.with_token("tok");

    let params = SearchKontenParams::from_selection(Some("Author"), "Budi Santoso");
    let hits = client.search_konten(&params).await.unwrap();
    assert_eq!(hits[0].judul, "penulis=Budi+Santoso");
}

#[tokio::test]
async fn empty_search_has_no_query_string() {
    let client = client_for(echo_query_router()).await.with_token("tok");

    let hits = client
        .search_konten(&SearchKontenParams::default())
        .await
        .unwrap();
    assert_eq!(hits[0].judul, "<none>");
}

#[tokio::test]
async fn konten_code_is_path_encoded() {
    let router = Router::new().route(
        "/api/admin/konten/{kode}",
        get(|Path(kode): Path<String>| async move {
            let mut row = konten_row(&kode, "Detail");
            row["isiHTML"] = json!("<p>isi</p>");
            Json(json!({ "success": true, "data": row }))
        }),
    );
    let client = client_for(router).await.with_token("tok");

    let detail = client.get_konten("KT 01").await.unwrap();
    assert_eq!(detail.item.kode_konten, "KT 01");
    assert_eq!(detail.isi_html, "<p>isi</p>");
}

#[tokio::test]
async fn unsuccessful_delete_is_rejected_with_message() {
    let router = Router::new().route(
        "/api/admin/konten/{kode}",
        axum::routing::delete(|| async {
            Json(json!({ "success": false, "message": "Konten sedang dipakai" }))
        }),
    );
    let client = client_for(router).await.with_token("tok");

    assert_matches!(
        client.delete_konten("K1").await,
        Err(ClientError::Rejected(message)) if message == "Konten sedang dipakai"
    );
}

#[tokio::test]
async fn create_konten_posts_wire_names() {
    use fivetv_core::konten::{ArticleForm, ArticlePayload, Kategori};

    let router = Router::new().route(
        "/api/admin/konten",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["judul"], "Judul");
            assert_eq!(body["penulis"], "Admin");
            assert_eq!(body["kategori"], "program");
            assert_eq!(body["jenisId"], 2);
            assert_eq!(body["isiHTML"], "<p>x</p>");
            Json(json!({ "success": true, "message": "Konten berhasil ditambahkan" }))
        }),
    );
    let client = client_for(router).await.with_token("tok");

    let form = ArticleForm {
        title: "Judul".into(),
        category: Kategori::Program,
        jenis_id: 2,
        content: "<p>x</p>".into(),
        ..ArticleForm::default()
    };
    let ack = client
        .create_konten(&ArticlePayload::from_form(&form, None))
        .await
        .unwrap();
    assert_eq!(ack.message.as_deref(), Some("Konten berhasil ditambahkan"));
}

// ---------------------------------------------------------------------------
// Config and jenis
// ---------------------------------------------------------------------------

#[tokio::test]
async fn website_config_is_fetched_without_token() {
    let router = Router::new().route(
        "/api/admin/config",
        get(|headers: HeaderMap| async move {
            assert!(bearer(&headers).is_none());
            Json(json!({
                "success": true,
                "data": { "id": 1, "visi": "Maju", "kontenI_id": 7 }
            }))
        }),
    );
    let client = client_for(router).await.with_token("tok");

    let config = client.website_config().await.unwrap();
    assert_eq!(config.data.visi, "Maju");
    assert_eq!(config.data.konten_i_id, "7");
}

#[tokio::test]
async fn list_jenis_required_needs_token() {
    let client = BackendClient::new(&common::dead_backend().await).unwrap();
    let err = client.list_jenis_required().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Authentication token not found. Please login again."
    );
}

#[tokio::test]
async fn list_jenis_works_anonymously() {
    let router = Router::new().route(
        "/api/admin/jenis",
        get(|| async {
            Json(json!({ "success": true, "data": [{ "id": 1, "nama": "Berita" }] }))
        }),
    );
    let client = client_for(router).await;

    let jenis = client.list_jenis().await.unwrap();
    assert_eq!(jenis[0].nama, "Berita");
}
