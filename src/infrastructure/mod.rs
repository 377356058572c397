//! Infrastructure layer: MongoDB access and in-memory storage

pub mod database;
pub mod storage;

pub use database::repositories::MongoBookingRepository;
pub use database::{init_database, DatabaseConfig};
pub use storage::InMemoryBookingRepository;
