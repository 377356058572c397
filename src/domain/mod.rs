//! Domain layer: the booking entity, repository interface and errors

pub mod booking;
pub mod error;

// Re-export commonly used types
pub use booking::{
    is_well_formed_id, Booking, BookingPatch, BookingRepository, NewBooking, DEFAULT_TICKET_TYPE,
};
pub use error::{DomainError, DomainResult};
