//! MongoDB connection setup

pub mod repositories;

use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::info;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    pub uri: String,
    /// Database name
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "synergia".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            uri: std::env::var("MONGO_URI").unwrap_or(defaults.uri),
            database: std::env::var("MONGO_DB").unwrap_or(defaults.database),
        }
    }
}

/// Initialize database connection
///
/// The driver connects lazily, so a ping forces the first round-trip and
/// surfaces a bad connection string at startup.
pub async fn init_database(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    info!("Connecting to database: {}", config.uri);
    let client = Client::with_uri_str(&config.uri).await?;
    let db = client.database(&config.database);
    db.run_command(doc! { "ping": 1 }).await?;
    info!("Database connected successfully");
    Ok(db)
}

// ── Tests ──────────────────────────────────────────────────────
