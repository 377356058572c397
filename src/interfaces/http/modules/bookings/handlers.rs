//! Booking REST API handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{
    BookingResponse, CreateBookingRequest, FilterQuery, SearchQuery, UpdateBookingRequest,
};
use crate::domain::{
    is_well_formed_id, BookingPatch, BookingRepository, DomainError, NewBooking,
    DEFAULT_TICKET_TYPE,
};
use crate::interfaces::http::common::{MessageResponse, ValidatedJson};
use crate::interfaces::http::error::ApiError;

/// Shared state for booking routes
#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<dyn BookingRepository>,
}

fn ensure_well_formed_id(id: &str) -> Result<(), ApiError> {
    if is_well_formed_id(id) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!("Invalid booking id: {}", id)).into())
    }
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "All bookings", body = [BookingResponse])
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = state.bookings.find_all().await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Created", body = BookingResponse),
        (status = 400, description = "Missing or empty required field", body = MessageResponse)
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let new_booking = NewBooking {
        name: req.name,
        email: req.email,
        event: req.event,
        ticket_type: req
            .ticket_type
            .unwrap_or_else(|| DEFAULT_TICKET_TYPE.to_string()),
    };

    let created = state.bookings.insert(new_booking).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking details", body = BookingResponse),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 404, description = "Not found", body = MessageResponse)
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookingResponse>, ApiError> {
    ensure_well_formed_id(&id)?;
    let booking = state
        .bookings
        .find_by_id(&id)
        .await?
        .ok_or(DomainError::NotFound(id))?;
    Ok(Json(booking.into()))
}

#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking id")),
    request_body = UpdateBookingRequest,
    responses(
        (status = 200, description = "Updated", body = BookingResponse),
        (status = 400, description = "Malformed id or empty field", body = MessageResponse),
        (status = 404, description = "Not found", body = MessageResponse)
    )
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateBookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    ensure_well_formed_id(&id)?;

    let patch = BookingPatch {
        name: req.name,
        email: req.email,
        event: req.event,
        ticket_type: req.ticket_type,
    };

    let updated = state
        .bookings
        .update(&id, patch)
        .await?
        .ok_or(DomainError::NotFound(id))?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 404, description = "Not found", body = MessageResponse)
    )
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    ensure_well_formed_id(&id)?;

    if state.bookings.delete(&id).await? {
        Ok(Json(MessageResponse::new("Booking deleted successfully")))
    } else {
        Err(DomainError::NotFound(id).into())
    }
}

#[utoipa::path(
    get,
    path = "/api/bookings/search",
    tag = "Bookings",
    params(SearchQuery),
    responses(
        (status = 200, description = "Bookings matching the email", body = [BookingResponse]),
        (status = 400, description = "Missing email parameter", body = MessageResponse)
    )
)]
pub async fn search_bookings(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let email = query
        .email
        .filter(|email| !email.is_empty())
        .ok_or_else(|| DomainError::Validation("email query parameter is required".to_string()))?;

    let bookings = state.bookings.find_by_email(&email).await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/bookings/filter",
    tag = "Bookings",
    params(FilterQuery),
    responses(
        (status = 200, description = "Bookings matching the event", body = [BookingResponse]),
        (status = 400, description = "Missing event parameter", body = MessageResponse)
    )
)]
pub async fn filter_bookings(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let event = query
        .event
        .filter(|event| !event.is_empty())
        .ok_or_else(|| DomainError::Validation("event query parameter is required".to_string()))?;

    let bookings = state.bookings.find_by_event(&event).await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}
