//! Welcome and health endpoints

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::interfaces::http::common::MessageResponse;

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    )
)]
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new(
        "Welcome to the Synergia Event Booking API",
    ))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
