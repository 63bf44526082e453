//! Service abstractions for external services.
//!
//! These traits decouple the contact workflow from a concrete delivery
//! provider, so handlers can be wired to EmailJS in production and to a fake
//! in tests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Flattened template variables sent with a transactional email.
pub type TemplateParams = BTreeMap<String, String>;

/// A wrapper error type that implements std::error::Error for
/// `Box<dyn std::error::Error + Send + Sync>`
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// The three identifiers that authorize a template send.
#[derive(Clone, PartialEq, Eq)]
pub struct EmailCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

// Keys are not secret in the browser world, but they still stay out of logs.
impl fmt::Debug for EmailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailCredentials")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &"<redacted>")
            .finish()
    }
}

/// Provider response for an accepted email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailReceipt {
    /// HTTP status reported by the provider.
    pub status: u16,
    /// Human-readable status text, e.g. "OK".
    pub text: String,
}

/// A trait for transactional email delivery.
pub trait EmailService: Send + Sync {
    /// Error type returned by email service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Render `params` into the template identified by `credentials` and send it.
    fn send_template(
        &self,
        credentials: &EmailCredentials,
        params: &TemplateParams,
    ) -> BoxFuture<'_, EmailReceipt, Self::Error>;
}

impl<S: EmailService + ?Sized> EmailService for Arc<S> {
    type Error = S::Error;

    fn send_template(
        &self,
        credentials: &EmailCredentials,
        params: &TemplateParams,
    ) -> BoxFuture<'_, EmailReceipt, Self::Error> {
        (**self).send_template(credentials, params)
    }
}

/// A factory for creating service instances.
pub trait ServiceFactory: Send + Sync {
    /// Get an email service instance, if one is configured.
    fn email_service(&self) -> Option<Arc<dyn EmailService<Error = BoxedError>>>;
}
