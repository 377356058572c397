//! API Router with Swagger UI

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::MessageResponse;
use super::modules::bookings::dto::{BookingResponse, CreateBookingRequest, UpdateBookingRequest};
use super::modules::bookings::{self, AppState};
use super::modules::health::{self, handlers::HealthResponse};
use crate::domain::BookingRepository;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::welcome,
        health::handlers::health_check,
        // Bookings
        bookings::handlers::list_bookings,
        bookings::handlers::create_booking,
        bookings::handlers::get_booking,
        bookings::handlers::update_booking,
        bookings::handlers::delete_booking,
        bookings::handlers::search_bookings,
        bookings::handlers::filter_bookings,
    ),
    components(
        schemas(
            MessageResponse,
            HealthResponse,
            BookingResponse,
            CreateBookingRequest,
            UpdateBookingRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and welcome endpoints"),
        (name = "Bookings", description = "Event booking CRUD and lookup operations"),
    ),
    info(
        title = "Synergia Event Booking API",
        version = "1.0.0",
        description = "REST API for managing event bookings",
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(repository: Arc<dyn BookingRepository>) -> Router {
    let state = AppState {
        bookings: repository,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // `/search` and `/filter` sit beside `/{id}`; axum matches static
    // segments before path parameters.
    let booking_routes = Router::new()
        .route(
            "/",
            get(bookings::handlers::list_bookings).post(bookings::handlers::create_booking),
        )
        .route("/search", get(bookings::handlers::search_bookings))
        .route("/filter", get(bookings::handlers::filter_bookings))
        .route(
            "/{id}",
            get(bookings::handlers::get_booking)
                .put(bookings::handlers::update_booking)
                .delete(bookings::handlers::delete_booking),
        )
        .with_state(state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        .merge(swagger_routes)
        .route("/", get(health::handlers::welcome))
        .route("/health", get(health::handlers::health_check))
        .nest("/api/bookings", booking_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
