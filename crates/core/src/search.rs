//! Admin content search: mapping the column selector and text box onto the
//! backend's field-equality query keys.

use serde::{Deserialize, Serialize};

use crate::konten::Kategori;

/// Column chosen in the admin search selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchColumn {
    Author,
    Title,
    Type,
    Category,
    Date,
}

impl SearchColumn {
    pub const ALL: [SearchColumn; 5] = [
        SearchColumn::Author,
        SearchColumn::Title,
        SearchColumn::Type,
        SearchColumn::Category,
        SearchColumn::Date,
    ];

    /// Parse the selector value. Blank or unknown values select nothing.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "Author" => Some(Self::Author),
            "Title" => Some(Self::Title),
            "Type" => Some(Self::Type),
            "Category" => Some(Self::Category),
            "Date" => Some(Self::Date),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Author => "Author",
            Self::Title => "Title",
            Self::Type => "Type",
            Self::Category => "Category",
            Self::Date => "Date",
        }
    }
}

/// Query parameters for `GET /api/admin/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchKontenParams {
    pub penulis: Option<String>,
    pub judul: Option<String>,
    pub jenis: Option<String>,
    pub kategori: Option<Kategori>,
    /// `yyyy-mm-dd`
    pub tanggal: Option<String>,
}

impl SearchKontenParams {
    /// Build parameters from the selector and the search text.
    ///
    /// Without a column, or with blank text, the result is empty and the
    /// caller should list everything. Unrecognized columns search by title.
    pub fn from_selection(column: Option<&str>, text: &str) -> Self {
        let text = text.trim();
        let Some(column) = column.filter(|c| !c.trim().is_empty()) else {
            return Self::default();
        };
        if text.is_empty() {
            return Self::default();
        }

        let value = Some(text.to_string());
        match SearchColumn::from_name(column) {
            Some(SearchColumn::Author) => Self {
                penulis: value,
                ..Self::default()
            },
            Some(SearchColumn::Type) => Self {
                kategori: Kategori::parse_loose(text),
                ..Self::default()
            },
            Some(SearchColumn::Category) => Self {
                jenis: value,
                ..Self::default()
            },
            Some(SearchColumn::Date) => Self {
                tanggal: value,
                ..Self::default()
            },
            Some(SearchColumn::Title) | None => Self {
                judul: value,
                ..Self::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Set parameters as ordered `(key, value)` pairs.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let text_fields = [
            ("penulis", &self.penulis),
            ("judul", &self.judul),
            ("jenis", &self.jenis),
        ];
        for (key, value) in text_fields {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, v.to_string()));
            }
        }
        if let Some(kategori) = self.kategori {
            pairs.push(("kategori", kategori.as_str().to_string()));
        }
        if let Some(v) = self.tanggal.as_deref().filter(|v| !v.is_empty()) {
            pairs.push(("tanggal", v.to_string()));
        }
        pairs
    }
}
