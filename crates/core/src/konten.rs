//! Content items ("konten"): articles and programs.
//!
//! Wire field names mirror the backend API exactly, including the
//! capitalized `Editor` / `Reporter` keys.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Marker left behind by the rich-text editor when the body is cleared.
pub const EMPTY_EDITOR_MARKER: &str = "<div><br></div>";

/// Author used when the form leaves the source blank.
pub const DEFAULT_PENULIS: &str = "Admin";

// ---------------------------------------------------------------------------
// Kategori
// ---------------------------------------------------------------------------

/// Top-level content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Kategori {
    #[default]
    Artikel,
    Program,
}

impl Kategori {
    /// API value (`"artikel"` / `"program"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artikel => "artikel",
            Self::Program => "program",
        }
    }

    /// Display label used in tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::Artikel => "Artikel",
            Self::Program => "Program",
        }
    }

    /// Strict parse of the API value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "artikel" => Some(Self::Artikel),
            "program" => Some(Self::Program),
            _ => None,
        }
    }

    /// Case-insensitive containment match used by the admin search box.
    ///
    /// "artikel" wins over "program" when both appear.
    pub fn parse_loose(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        if lower.contains("artikel") {
            Some(Self::Artikel)
        } else if lower.contains("program") {
            Some(Self::Program)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Payload records
// ---------------------------------------------------------------------------

/// Content item as served by the public API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Konten {
    #[serde(rename = "kodeKonten")]
    pub kode_konten: String,
    #[serde(default)]
    pub penulis: String,
    #[serde(default)]
    pub judul: String,
    #[serde(rename = "Editor", default)]
    pub editor: Option<String>,
    #[serde(rename = "Reporter", default)]
    pub reporter: Option<String>,
    #[serde(rename = "linkGambar", default)]
    pub link_gambar: Option<String>,
    #[serde(default)]
    pub view: i64,
    #[serde(rename = "viewMonth", default)]
    pub view_month: i64,
    #[serde(default)]
    pub tanggal: String,
    #[serde(rename = "isiHTML", default)]
    pub isi_html: String,
    #[serde(default)]
    pub kategori: Kategori,
    #[serde(default)]
    pub caption: String,
}

impl Konten {
    /// Public URL path of the detail page (`/artikel/{kode}` or `/program/{kode}`).
    pub fn detail_path(&self) -> String {
        format!("/{}/{}", self.kategori.as_str(), self.kode_konten)
    }
}

/// Nested taxonomy name returned alongside admin content rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JenisRef {
    pub nama: String,
}

/// Content row returned by the admin list and search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KontenItem {
    #[serde(rename = "kodeKonten")]
    pub kode_konten: String,
    #[serde(default)]
    pub penulis: String,
    #[serde(default)]
    pub judul: String,
    #[serde(rename = "Editor", default)]
    pub editor: Option<String>,
    #[serde(rename = "Reporter", default)]
    pub reporter: Option<String>,
    #[serde(rename = "linkGambar", default)]
    pub link_gambar: Option<String>,
    #[serde(default)]
    pub view: i64,
    #[serde(rename = "viewMonth", default)]
    pub view_month: i64,
    #[serde(default)]
    pub tanggal: String,
    #[serde(default)]
    pub kategori: Kategori,
    #[serde(rename = "jenisId", default)]
    pub jenis_id: Option<i64>,
    #[serde(default)]
    pub jenis: Option<JenisRef>,
}

impl KontenItem {
    /// Taxonomy name, or an empty string when the row has none.
    pub fn jenis_nama(&self) -> &str {
        self.jenis.as_ref().map(|j| j.nama.as_str()).unwrap_or("")
    }
}

/// Full content record fetched by code for the edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KontenDetail {
    #[serde(flatten)]
    pub item: KontenItem,
    #[serde(rename = "isiHTML", default)]
    pub isi_html: String,
}

// ---------------------------------------------------------------------------
// Article form
// ---------------------------------------------------------------------------

/// Values submitted by the add/edit article form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleForm {
    pub title: String,
    pub source: String,
    pub reporter: String,
    pub editor: String,
    pub category: Kategori,
    /// Selected jenis id; `0` means nothing was selected.
    pub jenis_id: i64,
    pub content: String,
}

impl ArticleForm {
    /// Pre-fill the edit form from a stored record.
    pub fn from_detail(detail: &KontenDetail) -> Self {
        let item = &detail.item;
        Self {
            title: item.judul.clone(),
            source: item.penulis.clone(),
            reporter: item.reporter.clone().unwrap_or_default(),
            editor: item.editor.clone().unwrap_or_default(),
            category: item.kategori,
            jenis_id: item.jenis_id.unwrap_or(0),
            content: detail.isi_html.clone(),
        }
    }
}

/// Validate the article form, reporting every problem in display order.
pub fn validate_article_form(form: &ArticleForm) -> Result<(), CoreError> {
    let mut errors = Vec::new();

    if form.title.trim().is_empty() {
        errors.push("Judul artikel harus diisi".to_string());
    }

    let content = form.content.trim();
    if content.is_empty() || content == EMPTY_EDITOR_MARKER {
        errors.push("Konten artikel harus diisi".to_string());
    }

    if form.jenis_id <= 0 {
        errors.push("Silakan pilih jenis artikel".to_string());
    }

    CoreError::from_form_errors(errors)
}

/// Request body for creating or updating a content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlePayload {
    pub penulis: String,
    pub judul: String,
    #[serde(rename = "Editor")]
    pub editor: Option<String>,
    #[serde(rename = "Reporter")]
    pub reporter: Option<String>,
    #[serde(rename = "linkGambar")]
    pub link_gambar: Option<String>,
    pub kategori: Kategori,
    #[serde(rename = "jenisId")]
    pub jenis_id: Option<i64>,
    #[serde(rename = "isiHTML")]
    pub isi_html: String,
}

impl ArticlePayload {
    pub fn from_form(form: &ArticleForm, link_gambar: Option<String>) -> Self {
        let penulis = match form.source.trim() {
            "" => DEFAULT_PENULIS.to_string(),
            source => source.to_string(),
        };

        Self {
            penulis,
            judul: form.title.trim().to_string(),
            editor: non_blank(&form.editor),
            reporter: non_blank(&form.reporter),
            link_gambar: link_gambar.filter(|l| !l.trim().is_empty()),
            kategori: form.category,
            jenis_id: (form.jenis_id > 0).then_some(form.jenis_id),
            isi_html: form.content.clone(),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// HTML helpers
// ---------------------------------------------------------------------------

/// Remove every `<...>` tag and trim the remaining text.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Plain-text excerpt of at most `max_chars` characters.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = strip_html(html);
    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
