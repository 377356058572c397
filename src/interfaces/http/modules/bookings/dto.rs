//! Booking DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::Booking;

/// A booking as returned by the API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub event: String,
    pub ticket_type: String,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            name: b.name,
            email: b.email,
            event: b.event,
            ticket_type: b.ticket_type,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "event is required"))]
    pub event: String,
    /// Defaults to "General" when absent
    #[validate(length(min = 1, message = "ticketType must not be empty"))]
    pub ticket_type: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "event must not be empty"))]
    pub event: Option<String>,
    #[validate(length(min = 1, message = "ticketType must not be empty"))]
    pub ticket_type: Option<String>,
}

/// Query parameters for `/api/bookings/search`
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Email to match exactly
    pub email: Option<String>,
}

/// Query parameters for `/api/bookings/filter`
#[derive(Debug, Deserialize, IntoParams)]
pub struct FilterQuery {
    /// Event name to match exactly
    pub event: Option<String>,
}
