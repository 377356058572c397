//!
//! Synergia Event Booking REST service.
//! Reads configuration from the environment (HOST, PORT, MONGO_URI, MONGO_DB).

use std::sync::Arc;

use tracing::{error, info};

use synergia_bookings::domain::BookingRepository;
use synergia_bookings::infrastructure::MongoBookingRepository;
use synergia_bookings::{create_api_router, init_database, AppConfig, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let db_config = DatabaseConfig::from_env();

    info!("Starting Synergia Event Booking API...");

    // ── Database ───────────────────────────────────────────────
    // Startup policy: connection failure exits non-zero.
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let bookings: Arc<dyn BookingRepository> = Arc::new(MongoBookingRepository::new(&db));

    let router = create_api_router(bookings);

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server running on http://{}", addr);
    info!("Swagger UI available at http://{}/docs", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Synergia Event Booking API shutdown complete");
    Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("🛑 Shutdown signal received");
}
