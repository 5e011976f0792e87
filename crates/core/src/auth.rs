//! Admin sign-in form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Credentials posted by the admin login page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Email tidak valid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password harus diisi"))]
    pub password: String,
}

impl LoginForm {
    /// Check both fields, email first, so messages render in form order.
    pub fn check(&self) -> Result<(), CoreError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let fields = errors.field_errors();
        let messages = ["email", "password"]
            .iter()
            .filter_map(|name| fields.get(*name))
            .flat_map(|errs| errs.iter())
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        CoreError::from_form_errors(messages)
    }
}
