use axum::extract::rejection::JsonRejection;
use std::fmt;
use thiserror::Error;

/// The base error type shared by the AccurusBill crates.
///
/// Feature crates keep their own error enums and convert into this one at the
/// HTTP boundary with `From` impls.
#[derive(Error, Debug)]
pub enum AccurusError {
    /// Error occurred while parsing a request body
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., an operation already running)
    #[error("Conflict: {0}")]
    ConflictError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for AccurusError {
    fn status_code(&self) -> u16 {
        match self {
            AccurusError::ParseError(_) => 400,
            AccurusError::ConfigError(_) => 500,
            AccurusError::ValidationError(_) => 400,
            AccurusError::ExternalServiceError { .. } => 502,
            AccurusError::ConflictError(_) => 409,
        }
    }
}

// Body rejections keep the JSON error shape instead of axum's plain text.
// Values the body cannot hold are validation errors, broken bodies parse errors.
impl From<JsonRejection> for AccurusError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AccurusError::ValidationError(err.body_text()),
            other => AccurusError::ParseError(other.body_text()),
        }
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> AccurusError {
    AccurusError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> AccurusError {
    AccurusError::ValidationError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> AccurusError {
    AccurusError::ConflictError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> AccurusError {
    AccurusError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
