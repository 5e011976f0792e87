//! Indonesian (id-ID) date formatting for content timestamps.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

const BULAN: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

const BULAN_PENDEK: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Western Indonesia Time (UTC+7), the site's display zone.
const WIB_OFFSET_SECS: i32 = 7 * 3600;

/// Parse an API timestamp (RFC 3339 or `yyyy-mm-dd`) into a WIB calendar date.
pub fn parse_tanggal(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        let wib = FixedOffset::east_opt(WIB_OFFSET_SECS)?;
        return Some(ts.with_timezone(&wib).date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `"5 Januari 2025"`. Unparseable input is returned unchanged.
pub fn format_tanggal_long(raw: &str) -> String {
    match parse_tanggal(raw) {
        Some(d) => format!("{} {} {}", d.day(), BULAN[d.month0() as usize], d.year()),
        None => raw.to_string(),
    }
}

/// `"05 Jan 2025"`. Unparseable input is returned unchanged.
pub fn format_tanggal_short(raw: &str) -> String {
    match parse_tanggal(raw) {
        Some(d) => format!(
            "{:02} {} {}",
            d.day(),
            BULAN_PENDEK[d.month0() as usize],
            d.year()
        ),
        None => raw.to_string(),
    }
}
