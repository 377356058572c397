//! Common HTTP response types

mod validated_json;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for errors and confirmations: `{"message": "..."}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
