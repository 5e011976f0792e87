//! Organization members ("anggota"), keyed by NIM.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Member record as returned by the admin and profile endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub id: i64,
    pub nama: String,
    pub nim: String,
    #[serde(default)]
    pub prodi: String,
    #[serde(default)]
    pub jabatan: String,
    #[serde(rename = "fotoLink", default)]
    pub foto_link: Option<String>,
    #[serde(default)]
    pub divisi: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(rename = "Instagram", default)]
    pub instagram: Option<String>,
}

/// Values submitted by the add/edit member form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberForm {
    pub nama: String,
    pub nim: String,
    pub prodi: String,
    pub jabatan: String,
    pub divisi: String,
    pub linkedin: String,
    pub instagram: String,
}

impl MemberForm {
    pub fn from_member(member: &Member) -> Self {
        Self {
            nama: member.nama.clone(),
            nim: member.nim.clone(),
            prodi: member.prodi.clone(),
            jabatan: member.jabatan.clone(),
            divisi: member.divisi.clone(),
            linkedin: member.linkedin.clone().unwrap_or_default(),
            instagram: member.instagram.clone().unwrap_or_default(),
        }
    }
}

/// Validate the member form, reporting every problem in display order.
pub fn validate_member_form(form: &MemberForm) -> Result<(), CoreError> {
    let mut errors = Vec::new();

    if form.nama.trim().is_empty() {
        errors.push("Nama harus diisi".to_string());
    }

    let nim = form.nim.trim();
    if nim.is_empty() {
        errors.push("NIM harus diisi".to_string());
    } else if !nim.chars().all(|c| c.is_ascii_digit()) {
        errors.push("NIM harus berupa angka".to_string());
    }

    if form.prodi.trim().is_empty() {
        errors.push("Program Studi harus diisi".to_string());
    }
    if form.jabatan.trim().is_empty() {
        errors.push("Jabatan harus diisi".to_string());
    }
    if form.divisi.trim().is_empty() {
        errors.push("Divisi harus diisi".to_string());
    }

    CoreError::from_form_errors(errors)
}

/// Request body for `POST /api/admin/anggota`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMember {
    pub nama: String,
    pub nim: String,
    pub prodi: String,
    pub jabatan: String,
    #[serde(rename = "fotoLink", skip_serializing_if = "Option::is_none")]
    pub foto_link: Option<String>,
    pub divisi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(rename = "Instagram", skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl NewMember {
    pub fn from_form(form: &MemberForm, foto_link: Option<String>) -> Self {
        Self {
            nama: form.nama.trim().to_string(),
            nim: form.nim.trim().to_string(),
            prodi: form.prodi.trim().to_string(),
            jabatan: form.jabatan.trim().to_string(),
            foto_link,
            divisi: form.divisi.trim().to_string(),
            linkedin: non_blank(&form.linkedin),
            instagram: non_blank(&form.instagram),
        }
    }
}

/// Request body for `PUT /api/admin/anggota/{nim}`. The NIM itself is immutable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prodi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jabatan: Option<String>,
    #[serde(rename = "fotoLink", skip_serializing_if = "Option::is_none")]
    pub foto_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(rename = "Instagram", skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl MemberUpdate {
    /// Social links are always sent, so a cleared field clears the stored link.
    pub fn from_form(form: &MemberForm, foto_link: Option<String>) -> Self {
        Self {
            nama: Some(form.nama.trim().to_string()),
            prodi: Some(form.prodi.trim().to_string()),
            jabatan: Some(form.jabatan.trim().to_string()),
            foto_link,
            divisi: Some(form.divisi.trim().to_string()),
            linkedin: Some(form.linkedin.trim().to_string()),
            instagram: Some(form.instagram.trim().to_string()),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
