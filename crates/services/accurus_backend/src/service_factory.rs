//! Service factory implementation.
//!
//! Builds the external services the backend depends on from the loaded
//! configuration and hands them out as trait objects.
use accurus_common::services::{
    BoxFuture, BoxedError, EmailCredentials, EmailReceipt, EmailService, ServiceFactory,
    TemplateParams,
};
use accurus_config::{AppConfig, EmailJsConfig};
use accurus_emailjs::EmailJsClient;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Adapts any [`EmailService`] to the `BoxedError` flavour stored in shared state.
pub struct BoxedEmailService<S> {
    inner: S,
}

impl<S> BoxedEmailService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: EmailService> EmailService for BoxedEmailService<S> {
    type Error = BoxedError;

    fn send_template(
        &self,
        credentials: &EmailCredentials,
        params: &TemplateParams,
    ) -> BoxFuture<'_, EmailReceipt, Self::Error> {
        let send = self.inner.send_template(credentials, params);
        Box::pin(async move { send.await.map_err(|e| BoxedError(Box::new(e))) })
    }
}

/// Service factory for the AccurusBill backend.
pub struct AccurusServiceFactory {
    config: Arc<AppConfig>,
    email_service: Option<Arc<dyn EmailService<Error = BoxedError>>>,
}

impl AccurusServiceFactory {
    /// Create a new service factory.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let email_service = build_email_service(&config.emailjs);
        Self {
            config,
            email_service,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

fn build_email_service(
    settings: &EmailJsConfig,
) -> Option<Arc<dyn EmailService<Error = BoxedError>>> {
    // Missing credentials are reported per submission, the client is still built.
    let missing = settings.missing_credentials();
    if !missing.is_empty() {
        warn!(
            "⚠️ EmailJS credentials not set ({}), contact submissions will be refused",
            missing.join(", ")
        );
    }

    match EmailJsClient::new(settings) {
        Ok(client) => {
            info!("ℹ️ EmailJS client ready, sending to {}", client.api_url());
            Some(Arc::new(BoxedEmailService::new(client)))
        }
        Err(e) => {
            error!("❌ Failed to create EmailJS client: {}", e);
            None
        }
    }
}

impl ServiceFactory for AccurusServiceFactory {
    fn email_service(&self) -> Option<Arc<dyn EmailService<Error = BoxedError>>> {
        self.email_service.clone()
    }
}
