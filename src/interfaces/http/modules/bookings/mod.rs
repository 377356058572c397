//! Booking resource module

pub mod dto;
pub mod handlers;

pub use handlers::AppState;
