//! Content taxonomy ("jenis").

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jenis {
    pub id: i64,
    pub nama: String,
}

/// Request body for `POST /api/admin/jenis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJenis {
    pub nama: String,
}

pub fn validate_jenis_form(nama: &str) -> Result<(), CoreError> {
    if nama.trim().is_empty() {
        return Err(CoreError::Validation("Nama jenis harus diisi".into()));
    }
    Ok(())
}
