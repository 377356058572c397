//! HTTP REST API interfaces
//!
//! - `common`: shared response types and the validated JSON extractor
//! - `error`: translation of domain errors to HTTP responses
//! - `modules`: request handlers per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod error;
pub mod modules;
pub mod router;

pub use error::ApiError;
pub use router::create_api_router;
