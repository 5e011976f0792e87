//! Admin dashboard.

use axum::extract::{Query, State};
use axum::response::Html;
use fivetv_core::dashboard::Periode;
use fivetv_core::konten::Konten;
use fivetv_core::pagination::PUBLIC_PAGE_SIZE;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::render::{admin_context, render};
use crate::session::AdminSession;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub periode: Option<u32>,
    pub notice: Option<String>,
}

#[derive(Debug, Serialize)]
struct PeriodeOption {
    label: &'static str,
    months: u32,
    selected: bool,
}

/// GET /admin/home
pub async fn dashboard(
    State(state): State<AppState>,
    session: AdminSession,
    Query(query): Query<HomeQuery>,
) -> AppResult<Html<String>> {
    let periode = Periode::from_months(query.periode);
    let api = session.api(&state);

    let (stats, artikel, program) = tokio::join!(
        api.admin_dashboard(periode),
        state.api.artikel(1, PUBLIC_PAGE_SIZE),
        state.api.program(1, PUBLIC_PAGE_SIZE),
    );
    let stats = stats?;

    let artikel_terpopuler: Vec<Konten> = artikel
        .map(|r| r.artikel_terpopuler)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load popular articles");
            Vec::new()
        });
    let program_terpopuler: Vec<Konten> = program
        .map(|r| r.program_terpopuler)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load popular programs");
            Vec::new()
        });

    let options: Vec<PeriodeOption> = Periode::ALL
        .iter()
        .map(|p| PeriodeOption {
            label: p.label(),
            months: p.months(),
            selected: *p == periode,
        })
        .collect();

    let mut context = admin_context("home", query.notice);
    context.insert("periode_options", &options);
    context.insert("stats", &stats);
    context.insert("views_series", &stats.views_series());
    context.insert("jenis_series", &stats.jenis_series());
    context.insert("artikel_terpopuler", &artikel_terpopuler);
    context.insert("program_terpopuler", &program_terpopuler);
    render(&state, "admin/home.html", &context)
}
