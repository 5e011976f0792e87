//! One-shot messages carried across redirects in the `?notice=` query.

use serde::Deserialize;

/// Query extractor for pages that show a notice banner.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

impl NoticeQuery {
    pub fn into_notice(self) -> Option<String> {
        self.notice.filter(|n| !n.trim().is_empty())
    }
}

/// Append `notice` to `path` as a percent-encoded query parameter.
pub fn with_notice(path: &str, notice: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(notice.as_bytes()).collect();
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}notice={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_is_encoded() {
        assert_eq!(
            with_notice("/admin", "Login berhasil!"),
            "/admin?notice=Login+berhasil%21"
        );
        assert_eq!(
            with_notice("/admin/anggota?page=2", "ok"),
            "/admin/anggota?page=2&notice=ok"
        );
    }
}
