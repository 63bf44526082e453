/// EmailJS REST client and its `EmailService` implementation.
pub mod client;

pub use client::{EmailJsClient, EmailJsError};
