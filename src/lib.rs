//! # Synergia Event Booking Service
//!
//! REST API for managing event bookings, backed by MongoDB.
//!
//! ## Architecture
//!
//! - **domain**: The `Booking` entity, repository trait and error types
//! - **infrastructure**: MongoDB-backed repository plus an in-memory
//!   repository for development and testing
//! - **interfaces**: HTTP layer (DTOs, handlers, router) with Swagger
//!   documentation
//! - **config**: Server configuration read from the environment

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::AppConfig;

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
