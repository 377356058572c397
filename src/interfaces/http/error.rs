//! Translation of domain errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::common::MessageResponse;
use crate::domain::DomainError;

/// Handler-boundary error: every domain error maps to one status and a
/// `{message}` body.
///
/// - `Validation` → 400
/// - `NotFound` → 404
/// - `Storage` → 500, with the collaborator's message surfaced verbatim
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Storage(_) => {
                error!("{}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(MessageResponse::new(self.0.to_string()))).into_response()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: DomainError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn validation_maps_to_400() {
        assert_eq!(
            status_of(DomainError::Validation("name is required".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            status_of(DomainError::NotFound("652f8c0012ab34cd56ef7890".to_string())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn storage_maps_to_500() {
        assert_eq!(
            status_of(DomainError::Storage("connection reset".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
