#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use fivetv_client::StorageSettings;
use fivetv_web::config::ServerConfig;
use fivetv_web::routes;
use fivetv_web::state::AppState;

pub const TOKEN: &str = "tok-test";
pub const BOUNDARY: &str = "fivetv-test-boundary";

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL on which nothing is listening.
pub async fn dead_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Build a test `ServerConfig` pointed at `api_base_url`, without storage.
pub fn test_config(api_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 10,
        api_base_url: api_base_url.to_string(),
        storage: StorageSettings::default(),
        max_upload_bytes: 12 * 1024 * 1024,
    }
}

/// Storage settings pointed at a fake storage server.
pub fn storage_settings(storage_url: &str) -> StorageSettings {
    StorageSettings {
        url: Some(storage_url.to_string()),
        anon_key: Some("anon".to_string()),
        service_key: Some("service".to_string()),
        bucket: None,
    }
}

/// Build the full application with the middleware stack used in `main.rs`,
/// talking to the backend at `api_base_url`.
pub fn build_test_app(api_base_url: &str) -> Router {
    build_app(test_config(api_base_url))
}

pub fn build_app(config: ServerConfig) -> Router {
    let state = AppState::new(config).unwrap();
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::app_routes())
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Spawn `backend` and build the app against it.
pub async fn app_with_backend(backend: Router) -> Router {
    let base = spawn_backend(backend).await;
    build_test_app(&base)
}

/// Fake config endpoint serving the social links every public page needs.
pub fn config_route() -> Router {
    Router::new().route(
        "/api/admin/config",
        get(|| async {
            Json(json!({
                "success": true,
                "data": {
                    "id": 1,
                    "desc_satu": "Media kampus",
                    "desc_dua": "Dikelola mahasiswa",
                    "visi": "Menjadi media terpercaya",
                    "misi": "<ol><li>Berkarya</li></ol>",
                    "instagram": "https://instagram.com/fivetv",
                    "banner": "-",
                    "struktur": "-",
                    "kontenI_id": "K1",
                    "kontenII_id": "K2",
                    "kontenIII_id": "K3"
                }
            }))
        }),
    )
}

/// A content item as the public endpoints return it.
pub fn konten(kode: &str, judul: &str, kategori: &str) -> Value {
    json!({
        "kodeKonten": kode,
        "judul": judul,
        "penulis": "Admin",
        "kategori": kategori,
        "tanggal": "2025-01-05T02:00:00.000Z",
        "isiHTML": "<p>Isi konten lengkap</p>",
        "linkGambar": "-",
        "view": 12,
        "viewMonth": 3,
        "caption": ""
    })
}

/// A content row as the admin endpoints return it.
pub fn konten_row(kode: &str, judul: &str) -> Value {
    json!({
        "kodeKonten": kode,
        "penulis": "Admin",
        "judul": judul,
        "view": 3,
        "viewMonth": 1,
        "tanggal": "2025-01-05",
        "kategori": "artikel",
        "jenisId": 1,
        "jenis": { "nama": "Berita" }
    })
}

pub fn member(nim: &str, nama: &str) -> Value {
    json!({
        "id": 1,
        "nama": nama,
        "nim": nim,
        "prodi": "Ilmu Komunikasi",
        "jabatan": "Ketua",
        "fotoLink": "-",
        "divisi": "Inti",
        "linkedin": null,
        "Instagram": null
    })
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get_page(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// GET with the admin session cookie set.
pub async fn get_admin(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(COOKIE, format!("adminToken={TOKEN}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST an urlencoded form, optionally with the session cookie.
pub async fn post_form(app: Router, uri: &str, body: &str, logged_in: bool) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if logged_in {
        builder = builder.header(COOKIE, format!("adminToken={TOKEN}"));
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// A file part of a multipart body.
pub struct FilePart<'a> {
    pub field: &'a str,
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

pub fn multipart_body(fields: &[(&str, &str)], files: &[FilePart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for file in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                file.field, file.file_name, file.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST a multipart form with the session cookie.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    files: &[FilePart<'_>],
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(COOKIE, format!("adminToken={TOKEN}"))
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields, files)))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect without Location")
        .to_str()
        .unwrap()
        .to_string()
}

pub fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string())
}
