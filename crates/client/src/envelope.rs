//! The backend's `{ success, data, message }` response shape.

use serde::Deserialize;

use crate::error::ClientError;

/// Standard response envelope returned by admin endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning `success: false` or a missing `data`
    /// field into [`ClientError::Rejected`] with the server's message (or
    /// `context` when it sent none).
    pub fn into_data(self, context: &str) -> Result<T, ClientError> {
        if !self.success {
            return Err(ClientError::Rejected(
                self.message.unwrap_or_else(|| context.to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ClientError::Rejected(self.message.unwrap_or_else(|| context.to_string())))
    }

    /// Accept a mutation response, keeping only the server's message.
    pub fn into_ack(self, context: &str) -> Result<Ack, ClientError> {
        if !self.success {
            return Err(ClientError::Rejected(
                self.message.unwrap_or_else(|| context.to_string()),
            ));
        }
        Ok(Ack {
            message: self.message,
        })
    }
}

/// Acknowledgement of a create/update/delete call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ack {
    pub message: Option<String>,
}
