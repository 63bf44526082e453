// --- File: crates/accurus_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, conflict, external_service_error, validation_error, AccurusError,
    HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::client::create_client;

pub use logging::{init, init_with_level};
