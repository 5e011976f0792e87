//! Pre-aggregated payloads for the public pages and the admin dashboard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::konten::Konten;
use crate::member::Member;
use crate::site_config::WebsiteConfig;

// ---------------------------------------------------------------------------
// Public payloads
// ---------------------------------------------------------------------------

/// `GET /api/user/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardResponse {
    pub konten_terbaru: Vec<Konten>,
    pub konten_terpopuler: Vec<Konten>,
    pub artikel_terbaru: Vec<Konten>,
    pub program_terbaru: Vec<Konten>,
}

impl DashboardResponse {
    /// Apply the home-page title filter to every list.
    pub fn filtered(&self, query: &str) -> Self {
        Self {
            konten_terbaru: filter_by_title(&self.konten_terbaru, query),
            konten_terpopuler: filter_by_title(&self.konten_terpopuler, query),
            artikel_terbaru: filter_by_title(&self.artikel_terbaru, query),
            program_terbaru: filter_by_title(&self.program_terbaru, query),
        }
    }
}

/// `GET /api/user/artikel?page=&limit=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtikelResponse {
    pub artikel_terbaru: Vec<Konten>,
    pub artikel_terpopuler: Vec<Konten>,
    pub semua_artikel: Vec<Konten>,
}

/// `GET /api/user/program?page=&limit=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramResponse {
    pub program_terbaru: Vec<Konten>,
    pub program_terpopuler: Vec<Konten>,
    pub semua_program: Vec<Konten>,
}

/// Category-neutral view of one page of [`ArtikelResponse`] / [`ProgramResponse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingPage {
    pub terbaru: Vec<Konten>,
    pub terpopuler: Vec<Konten>,
}

impl From<ArtikelResponse> for ListingPage {
    fn from(r: ArtikelResponse) -> Self {
        Self {
            terbaru: r.artikel_terbaru,
            terpopuler: r.artikel_terpopuler,
        }
    }
}

impl From<ProgramResponse> for ListingPage {
    fn from(r: ProgramResponse) -> Self {
        Self {
            terbaru: r.program_terbaru,
            terpopuler: r.program_terpopuler,
        }
    }
}

impl ListingPage {
    /// Merge successive "load more" pages: newest items accumulate, the
    /// popular list is taken from the first page only.
    pub fn accumulate(pages: Vec<ListingPage>) -> Self {
        let mut iter = pages.into_iter();
        let Some(mut first) = iter.next() else {
            return Self::default();
        };
        for page in iter {
            first.terbaru.extend(page.terbaru);
        }
        first
    }

    /// Title search over newest and popular items combined.
    pub fn search(&self, query: &str) -> Vec<Konten> {
        let all: Vec<Konten> = self
            .terbaru
            .iter()
            .chain(self.terpopuler.iter())
            .cloned()
            .collect();
        filter_by_title(&all, query)
    }
}

/// `GET /api/user/konten/{kode}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailResponse {
    pub konten: Konten,
    #[serde(default)]
    pub konten_terpopuler: Vec<Konten>,
    #[serde(default)]
    pub konten_terbaru: Vec<Konten>,
}

impl DetailResponse {
    /// The "Lihat Juga" card: the most popular item other than this one.
    pub fn recommendation(&self) -> Option<&Konten> {
        self.konten_terpopuler
            .iter()
            .chain(self.konten_terbaru.iter())
            .find(|k| k.kode_konten != self.konten.kode_konten)
    }
}

/// `GET /api/user/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub website_config: WebsiteConfig,
    #[serde(default)]
    pub semua_pengurus: Vec<Member>,
}

/// Case-insensitive title filter. A blank query keeps every item.
pub fn filter_by_title(items: &[Konten], query: &str) -> Vec<Konten> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|k| k.judul.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Admin dashboard
// ---------------------------------------------------------------------------

/// Views aggregated per taxonomy entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MostViewsByJenis {
    pub jenis: String,
    pub total_views: i64,
}

/// `GET /api/admin/dashboard[?periode=N]` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardAdminData {
    /// Views keyed by period label, e.g. `"2025-02"`.
    pub views_per_periode: BTreeMap<String, i64>,
    pub total_views_this_month: i64,
    pub total_all_views: i64,
    pub count_artikel: i64,
    pub count_program: i64,
    pub most_views_by_jenis: Vec<MostViewsByJenis>,
}

/// One point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: i64,
    /// Height relative to the series maximum, 0-100.
    pub percent: u8,
}

impl DashboardAdminData {
    /// Highest per-period view count, 0 without data.
    pub fn max_views(&self) -> i64 {
        self.views_per_periode.values().copied().max().unwrap_or(0)
    }

    /// Visitors per period, ordered by period key.
    pub fn views_series(&self) -> Vec<ChartPoint> {
        let max = self.max_views();
        self.views_per_periode
            .iter()
            .map(|(label, &value)| ChartPoint {
                label: label.clone(),
                value,
                percent: percent_of(value, max),
            })
            .collect()
    }

    /// Views per jenis in the order the API returned them.
    pub fn jenis_series(&self) -> Vec<ChartPoint> {
        let max = self
            .most_views_by_jenis
            .iter()
            .map(|j| j.total_views)
            .max()
            .unwrap_or(0);
        self.most_views_by_jenis
            .iter()
            .map(|j| ChartPoint {
                label: j.jenis.clone(),
                value: j.total_views,
                percent: percent_of(j.total_views, max),
            })
            .collect()
    }
}

fn percent_of(value: i64, max: i64) -> u8 {
    if max <= 0 || value <= 0 {
        return 0;
    }
    ((value.min(max) * 100) / max) as u8
}

/// Reporting window offered by the dashboard's period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Periode {
    ThreeMonths,
    SixMonths,
    NineMonths,
    TwelveMonths,
    All,
}

impl Periode {
    pub const ALL: [Periode; 5] = [
        Periode::ThreeMonths,
        Periode::SixMonths,
        Periode::NineMonths,
        Periode::TwelveMonths,
        Periode::All,
    ];

    /// Value sent as `?periode=`; "all" is encoded as 999 months.
    pub fn months(self) -> u32 {
        match self {
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::NineMonths => 9,
            Self::TwelveMonths => 12,
            Self::All => 999,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ThreeMonths => "3 Bulan",
            Self::SixMonths => "6 Bulan",
            Self::NineMonths => "9 Bulan",
            Self::TwelveMonths => "12 Bulan",
            Self::All => "Semua",
        }
    }

    /// Unknown values fall back to the three-month default.
    pub fn from_months(months: Option<u32>) -> Self {
        match months {
            Some(6) => Self::SixMonths,
            Some(9) => Self::NineMonths,
            Some(12) => Self::TwelveMonths,
            Some(999) => Self::All,
            _ => Self::ThreeMonths,
        }
    }
}
