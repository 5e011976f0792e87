//! Public reader pages: home, listings, detail and profile.

use axum::extract::{Path, Query, State};
use axum::http::header::HOST;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use fivetv_client::{BackendClient, ClientError};
use fivetv_core::dashboard::{DashboardResponse, ListingPage};
use fivetv_core::konten::Kategori;
use fivetv_core::pagination::PUBLIC_PAGE_SIZE;
use futures::future::join_all;
use serde::Deserialize;

use crate::error::AppResult;
use crate::render::{public_context, render};
use crate::state::AppState;

/// Upper bound on accumulated "load more" pages per request.
const MAX_LISTING_PAGES: u32 = 50;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub page: Option<u32>,
    pub q: Option<String>,
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

/// GET /
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Html<String>> {
    let q = query.q.unwrap_or_default();
    let mut context = public_context(&state).await;

    let dashboard = match state.api.dashboard().await {
        Ok(dashboard) => dashboard.filtered(&q),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load home page data");
            context.insert("load_error", "Gagal memuat konten. Silakan coba lagi nanti.");
            DashboardResponse::default()
        }
    };

    context.insert("dashboard", &dashboard);
    context.insert("q", &q);
    render(&state, "home.html", &context)
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// GET /artikel
pub async fn artikel_list(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> AppResult<Html<String>> {
    listing(&state, Kategori::Artikel, query).await
}

/// GET /program
pub async fn program_list(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> AppResult<Html<String>> {
    listing(&state, Kategori::Program, query).await
}

/// Render pages `1..=page` of a category accumulated into one list.
async fn listing(state: &AppState, kategori: Kategori, query: ListingQuery) -> AppResult<Html<String>> {
    let pages = query.page.unwrap_or(1).clamp(1, MAX_LISTING_PAGES);
    let q = query.q.unwrap_or_default();
    let mut context = public_context(state).await;

    let results = join_all((1..=pages).map(|page| fetch_listing(&state.api, kategori, page))).await;
    let mut fetched = Vec::new();
    let mut failed = false;
    for result in results {
        match result {
            Ok(page) => fetched.push(page),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    kategori = kategori.as_str(),
                    page = fetched.len() + 1,
                    "Failed to load listing page"
                );
                failed = true;
                break;
            }
        }
    }

    // Pages after a failed one are dropped; a failed later page can be retried.
    let loaded = fetched.len() as u32;
    let has_more = if failed {
        loaded > 0
    } else {
        fetched
            .last()
            .is_some_and(|p| p.terbaru.len() >= PUBLIC_PAGE_SIZE as usize)
    };
    if loaded == 0 {
        context.insert("load_error", "Gagal memuat konten. Silakan coba lagi nanti.");
    }
    let listing = ListingPage::accumulate(fetched);

    if !q.trim().is_empty() {
        context.insert("results", &listing.search(&q));
    }
    context.insert("kategori", kategori.as_str());
    context.insert("title", kategori.label());
    context.insert("listing", &listing);
    context.insert("has_more", &has_more);
    context.insert("next_page", &(loaded + 1));
    context.insert("q", &q);
    render(state, "listing.html", &context)
}

async fn fetch_listing(
    api: &BackendClient,
    kategori: Kategori,
    page: u32,
) -> Result<ListingPage, ClientError> {
    match kategori {
        Kategori::Artikel => api.artikel(page, PUBLIC_PAGE_SIZE).await.map(ListingPage::from),
        Kategori::Program => api.program(page, PUBLIC_PAGE_SIZE).await.map(ListingPage::from),
    }
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// GET /artikel/{kode}
pub async fn artikel_detail(
    State(state): State<AppState>,
    Path(kode): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    detail(&state, Kategori::Artikel, &kode, &headers).await
}

/// GET /program/{kode}
pub async fn program_detail(
    State(state): State<AppState>,
    Path(kode): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    detail(&state, Kategori::Program, &kode, &headers).await
}

async fn detail(
    state: &AppState,
    kategori: Kategori,
    kode: &str,
    headers: &HeaderMap,
) -> AppResult<Response> {
    let mut context = public_context(state).await;
    context.insert("kategori", kategori.as_str());

    let detail = match state.api.detail(kode).await {
        Ok(detail) => detail,
        Err(e) => {
            tracing::warn!(error = %e, kode, "Failed to load content detail");
            let page = render(state, "detail.html", &context)?;
            return Ok((StatusCode::NOT_FOUND, page).into_response());
        }
    };

    let page_url = absolute_url(headers, &format!("/{}/{}", kategori.as_str(), kode));
    let share_text = match detail.konten.judul.trim() {
        "" => "Baca artikel menarik ini",
        judul => judul,
    };
    let (text, url) = (encode_component(share_text), encode_component(&page_url));

    context.insert("konten", &detail.konten);
    context.insert("terpopuler", &detail.konten_terpopuler);
    context.insert("terbaru", &detail.konten_terbaru);
    context.insert("rekomendasi", &detail.recommendation());
    context.insert("whatsapp_url", &format!("https://wa.me/?text={text}%20{url}"));
    context.insert(
        "twitter_url",
        &format!("https://twitter.com/intent/tweet?text={text}&url={url}"),
    );
    Ok(render(state, "detail.html", &context)?.into_response())
}

/// Absolute URL of `path` on the host the browser used.
fn absolute_url(headers: &HeaderMap, path: &str) -> String {
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    format!("{scheme}://{host}{path}")
}

/// Percent-encode a URL component, spaces as `%20`.
fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /profile
pub async fn profile(State(state): State<AppState>) -> AppResult<Html<String>> {
    let mut context = public_context(&state).await;

    match state.api.profile().await {
        Ok(profile) => {
            context.insert("config", &profile.website_config.data);
            context.insert("members", &profile.semua_pengurus);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load profile");
            context.insert("load_error", "Gagal memuat profil. Silakan coba lagi nanti.");
        }
    }

    render(&state, "profile.html", &context)
}
