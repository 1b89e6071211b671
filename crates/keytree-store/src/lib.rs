// Error types
pub mod error;

// Connection settings
pub mod config;

// Redis implementation of the KeyStore collaborator
pub mod redis_store;

pub use config::{DEFAULT_PORT, DEFAULT_URL, StoreConfig};
pub use error::{Error, Result};
pub use redis_store::RedisStore;
