#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Collapse an ordered list of form errors into a single validation error.
    ///
    /// Returns `Ok(())` when the list is empty. Messages are joined with
    /// newlines so callers can show them one per line.
    pub fn from_form_errors(errors: Vec<String>) -> Result<(), CoreError> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors.join("\n")))
        }
    }

    /// Split a validation message back into its individual lines.
    pub fn form_errors(&self) -> Vec<String> {
        match self {
            CoreError::Validation(msg) => msg.lines().map(str::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_list_is_ok() {
        assert!(CoreError::from_form_errors(vec![]).is_ok());
    }

    #[test]
    fn form_errors_round_trip_in_order() {
        let err = CoreError::from_form_errors(vec!["a".into(), "b".into()]).unwrap_err();
        assert_eq!(err.form_errors(), vec!["a".to_string(), "b".to_string()]);
    }
}
