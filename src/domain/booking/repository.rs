//! Booking repository interface

use async_trait::async_trait;

use super::model::{Booking, BookingPatch, NewBooking};
use crate::domain::DomainResult;

/// Data access for bookings.
///
/// Implemented by the MongoDB repository in production and by an
/// in-memory repository for development and tests.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All bookings, in storage order (typically insertion order).
    async fn find_all(&self) -> DomainResult<Vec<Booking>>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>>;

    /// Insert a new booking; storage assigns the id.
    async fn insert(&self, booking: NewBooking) -> DomainResult<Booking>;

    /// Merge `patch` into the booking with `id`.
    ///
    /// Returns `None` when no booking has that id.
    async fn update(&self, id: &str, patch: BookingPatch) -> DomainResult<Option<Booking>>;

    /// Delete by id. Returns `false` when no booking has that id.
    async fn delete(&self, id: &str) -> DomainResult<bool>;

    /// Bookings whose email matches exactly (possibly empty).
    async fn find_by_email(&self, email: &str) -> DomainResult<Vec<Booking>>;

    /// Bookings whose event matches exactly (possibly empty).
    async fn find_by_event(&self, event: &str) -> DomainResult<Vec<Booking>>;
}
