use accurus_common::{
    config_error, conflict, external_service_error, validation_error, AccurusError,
};
use thiserror::Error;

/// Rejected field or panel input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("invalid contact method: {0:?} (expected \"Email\" or \"Phone\")")]
    InvalidContactMethod(String),

    #[error("invalid audit time: {0:?} is not an offered slot")]
    InvalidTimeSlot(String),

    #[error("FAQ index {index} out of range (0..{len})")]
    FaqIndexOutOfRange { index: usize, len: usize },
}

/// Why a submit attempt did not end in a delivered email.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// One or more delivery credentials are absent. Nothing was sent and the
    /// form keeps its values.
    #[error("missing EmailJS credentials: {}", .missing.join(", "))]
    ConfigurationMissing { missing: Vec<&'static str> },

    /// The provider rejected the send or could not be reached. The form has
    /// been reset.
    #[error("email delivery failed: {}", .detail.as_deref().unwrap_or("no detail"))]
    DeliveryFailed { detail: Option<String> },

    /// Another submit on the same form has not settled yet.
    #[error("a submission is already in progress")]
    InFlight,
}

impl SubmitError {
    /// Text suitable for showing to the person filling in the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::ConfigurationMissing { .. } => {
                "Configuration error. Please contact support."
            }
            SubmitError::DeliveryFailed { .. } => {
                "Failed to send the submission. Please try again."
            }
            SubmitError::InFlight => "Your submission is already being sent. Please wait.",
        }
    }
}

impl From<ContactError> for AccurusError {
    fn from(err: ContactError) -> Self {
        validation_error(err)
    }
}

impl From<SubmitError> for AccurusError {
    fn from(err: SubmitError) -> Self {
        match &err {
            SubmitError::ConfigurationMissing { .. } => config_error(err.user_message()),
            SubmitError::DeliveryFailed { .. } => {
                external_service_error("EmailJS", err.user_message())
            }
            SubmitError::InFlight => conflict(err.user_message()),
        }
    }
}
