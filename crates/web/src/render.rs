//! Template set, custom filters and shared page context.

use std::collections::HashMap;

use axum::response::Html;
use fivetv_core::format::{format_tanggal_long, format_tanggal_short};
use fivetv_core::konten::excerpt;
use fivetv_core::site_config::SocialLinks;
use tera::{Context, Tera, Value};

use crate::error::AppResult;
use crate::state::AppState;

/// Excerpt length used when the filter is called without `length`.
const DEFAULT_EXCERPT_CHARS: usize = 100;

/// Templates compiled into the binary as `(name, source)` pairs.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("listing.html", include_str!("../templates/listing.html")),
    ("detail.html", include_str!("../templates/detail.html")),
    ("profile.html", include_str!("../templates/profile.html")),
    ("admin/base.html", include_str!("../templates/admin/base.html")),
    ("admin/login.html", include_str!("../templates/admin/login.html")),
    ("admin/home.html", include_str!("../templates/admin/home.html")),
    ("admin/konten.html", include_str!("../templates/admin/konten.html")),
    ("admin/konten_form.html", include_str!("../templates/admin/konten_form.html")),
    ("admin/anggota.html", include_str!("../templates/admin/anggota.html")),
    ("admin/config.html", include_str!("../templates/admin/config.html")),
    ("macros.html", include_str!("../templates/macros.html")),
];

/// Compile every template and register the custom filters.
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.iter().copied())?;
    tera.register_filter("tanggal", tanggal_filter);
    tera.register_filter("tanggal_pendek", tanggal_pendek_filter);
    tera.register_filter("excerpt", excerpt_filter);
    Ok(tera)
}

/// Render `name` with `context` into an HTML response.
pub fn render(state: &AppState, name: &str, context: &Context) -> AppResult<Html<String>> {
    Ok(Html(state.templates.render(name, context)?))
}

/// Context every public page starts from: social links for header/footer.
///
/// A failed config fetch is not fatal; links fall back to `"#"`.
pub async fn public_context(state: &AppState) -> Context {
    let links = match state.api.website_config().await {
        Ok(config) => SocialLinks::from_config(Some(&config.data)),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch social links");
            SocialLinks::default()
        }
    };
    let mut context = Context::new();
    context.insert("social", &links);
    context
}

/// Context every admin page starts from: the active sidebar entry and an
/// optional notice banner.
pub fn admin_context(active: &str, notice: Option<String>) -> Context {
    let mut context = Context::new();
    context.insert("active", active);
    context.insert("notice", &notice);
    context
}

// ---- filters ----

fn tanggal_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(format_tanggal_long(value.as_str().unwrap_or(""))))
}

fn tanggal_pendek_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(format_tanggal_short(value.as_str().unwrap_or(""))))
}

fn excerpt_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let length = args
        .get("length")
        .and_then(Value::as_u64)
        .map(|n| n as usize)
        .unwrap_or(DEFAULT_EXCERPT_CHARS);
    Ok(Value::String(excerpt(value.as_str().unwrap_or(""), length)))
}
