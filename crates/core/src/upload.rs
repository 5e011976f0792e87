//! Image upload rules: accepted types, size limits and object naming.

use crate::error::CoreError;

/// MIME types accepted for every image upload.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Maximum member photo size (5 MiB).
pub const MAX_MEMBER_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Maximum config image and article cover size (10 MiB).
pub const MAX_CONFIG_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// URL value the backend stores when no image was ever uploaded.
pub const NO_IMAGE: &str = "-";

/// Which config image slot an upload replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSlot {
    Banner,
    Struktur,
}

impl ConfigSlot {
    pub fn name(self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::Struktur => "struktur",
        }
    }
}

/// What an uploaded image is for; decides limits and object path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadKind {
    MemberPhoto { nim: String },
    ConfigImage(ConfigSlot),
    ArticleCover,
}

impl UploadKind {
    pub fn max_bytes(&self) -> usize {
        match self {
            Self::MemberPhoto { .. } => MAX_MEMBER_PHOTO_BYTES,
            Self::ConfigImage(_) | Self::ArticleCover => MAX_CONFIG_IMAGE_BYTES,
        }
    }

    /// Whole-megabyte limit as shown to the user.
    pub fn max_megabytes(&self) -> usize {
        self.max_bytes() / (1024 * 1024)
    }
}

/// Check an incoming file against the type allowlist and the size limit.
pub fn validate_image(kind: &UploadKind, content_type: &str, size: usize) -> Result<(), CoreError> {
    if let UploadKind::MemberPhoto { nim } = kind {
        if nim.trim().is_empty() {
            return Err(CoreError::Validation(
                "NIM harus diisi terlebih dahulu sebelum mengunggah foto".into(),
            ));
        }
    }

    let mime = content_type.trim().to_ascii_lowercase();
    if !ALLOWED_IMAGE_TYPES.contains(&mime.as_str()) {
        return Err(CoreError::Validation(
            "Tipe file tidak didukung. Gunakan JPG, PNG, atau WebP.".into(),
        ));
    }

    if size > kind.max_bytes() {
        return Err(CoreError::Validation(format!(
            "Ukuran file terlalu besar. Maksimal {}MB.",
            kind.max_megabytes()
        )));
    }

    Ok(())
}

/// Lowercase extension after the last dot, `bin` when there is none.
pub fn file_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => "bin".to_string(),
    }
}

/// Object key inside the bucket for a new upload.
///
/// `now_millis` keeps names unique per upload; `nonce` disambiguates
/// article covers uploaded within the same millisecond.
pub fn object_path(kind: &UploadKind, file_name: &str, now_millis: i64, nonce: &str) -> String {
    let ext = file_extension(file_name);
    match kind {
        UploadKind::MemberPhoto { nim } => format!("members/{}-{now_millis}.{ext}", nim.trim()),
        UploadKind::ConfigImage(slot) => format!("config/{}-{now_millis}.{ext}", slot.name()),
        UploadKind::ArticleCover => format!("public/artikel-{now_millis}-{nonce}.{ext}"),
    }
}

/// Recover the object key (last two path segments) from a public URL.
///
/// Returns `None` for blank or `"-"` values and for unparseable URLs; those
/// have nothing to delete.
pub fn object_path_from_public_url(public_url: &str) -> Option<String> {
    let public_url = public_url.trim();
    if public_url.is_empty() || public_url == NO_IMAGE {
        return None;
    }
    let parsed = url::Url::parse(public_url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();
    if segments.len() < 2 {
        return None;
    }
    Some(segments[segments.len() - 2..].join("/"))
}
