//! Site-wide configuration singleton and the social links derived from it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

/// Placeholder href used whenever a social link is unknown.
pub const MISSING_LINK: &str = "#";

/// Editable configuration fields (the `PUT /api/admin/config` body).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteConfigData {
    #[serde(default)]
    pub desc_satu: String,
    #[serde(default)]
    pub desc_dua: String,
    #[serde(default)]
    pub visi: String,
    #[serde(default)]
    pub misi: String,
    /// Image link of the organization chart.
    #[serde(default)]
    pub struktur: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub youtube: String,
    #[serde(default)]
    pub tiktok: String,
    #[serde(default)]
    pub linkedin: String,
    /// Image link of the profile banner.
    #[serde(default)]
    pub banner: String,
    #[serde(rename = "kontenI_id", default, deserialize_with = "string_or_number")]
    pub konten_i_id: String,
    #[serde(rename = "kontenII_id", default, deserialize_with = "string_or_number")]
    pub konten_ii_id: String,
    #[serde(rename = "kontenIII_id", default, deserialize_with = "string_or_number")]
    pub konten_iii_id: String,
}

/// Stored configuration record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteConfig {
    #[serde(default)]
    pub id: i64,
    #[serde(flatten)]
    pub data: WebsiteConfigData,
}

impl WebsiteConfigData {
    /// The three featured content ids, in slot order.
    pub fn featured_ids(&self) -> [&str; 3] {
        [&self.konten_i_id, &self.konten_ii_id, &self.konten_iii_id]
    }
}

/// Social media hrefs rendered in the header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub instagram: String,
    pub twitter: String,
    pub youtube: String,
    pub tiktok: String,
    pub linkedin: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            instagram: MISSING_LINK.into(),
            twitter: MISSING_LINK.into(),
            youtube: MISSING_LINK.into(),
            tiktok: MISSING_LINK.into(),
            linkedin: MISSING_LINK.into(),
        }
    }
}

impl SocialLinks {
    /// Build links from a fetched config, falling back to `"#"` per field.
    pub fn from_config(config: Option<&WebsiteConfigData>) -> Self {
        let Some(config) = config else {
            return Self::default();
        };
        Self {
            instagram: or_missing(&config.instagram),
            twitter: or_missing(&config.twitter),
            youtube: or_missing(&config.youtube),
            tiktok: or_missing(&config.tiktok),
            linkedin: or_missing(&config.linkedin),
        }
    }
}

fn or_missing(value: &str) -> String {
    match value.trim() {
        "" => MISSING_LINK.to_string(),
        v => v.to_string(),
    }
}

/// Validate the configuration form, reporting every problem in display order.
pub fn validate_website_config_form(data: &WebsiteConfigData) -> Result<(), CoreError> {
    let mut errors = Vec::new();

    let required = [
        (&data.desc_satu, "Deskripsi satu harus diisi"),
        (&data.desc_dua, "Deskripsi dua harus diisi"),
        (&data.visi, "Visi harus diisi"),
        (&data.misi, "Misi harus diisi"),
    ];
    for (value, message) in required {
        if value.trim().is_empty() {
            errors.push(message.to_string());
        }
    }

    let social = [
        ("Instagram", &data.instagram),
        ("Twitter", &data.twitter),
        ("Youtube", &data.youtube),
        ("Tiktok", &data.tiktok),
        ("Linkedin", &data.linkedin),
    ];
    for (label, value) in social {
        let value = value.trim();
        if !value.is_empty() && url::Url::parse(value).is_err() {
            errors.push(format!("{label} harus berupa URL yang valid"));
        }
    }

    let featured = [
        (&data.konten_i_id, "Konten I ID harus diisi"),
        (&data.konten_ii_id, "Konten II ID harus diisi"),
        (&data.konten_iii_id, "Konten III ID harus diisi"),
    ];
    for (value, message) in featured {
        if value.trim().is_empty() {
            errors.push(message.to_string());
        }
    }

    CoreError::from_form_errors(errors)
}

/// Accept featured ids sent either as JSON strings or numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
