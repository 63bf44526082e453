// --- File: crates/services/accurus_backend/src/app_state.rs ---
use accurus_common::services::ServiceFactory;
use accurus_config::AppConfig;
use accurus_contact::handlers::ContactState;
use std::sync::Arc;

use crate::service_factory::AccurusServiceFactory;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// The configuration loaded at startup.
    pub config: Arc<AppConfig>,

    /// Access to external services, swappable in tests.
    pub service_factory: Arc<dyn ServiceFactory>,

    contact: Arc<ContactState>,
}

impl AppState {
    /// Create a new AppState backed by the real service factory.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let service_factory = Arc::new(AccurusServiceFactory::new(config.clone()));
        Self::with_service_factory(config, service_factory)
    }

    pub fn with_service_factory(
        config: Arc<AppConfig>,
        service_factory: Arc<dyn ServiceFactory>,
    ) -> Self {
        let contact = Arc::new(ContactState::new(
            config.clone(),
            service_factory.email_service(),
        ));
        Self {
            config,
            service_factory,
            contact,
        }
    }

    /// State for the contact routes, shared by every router built from this state.
    pub fn contact_state(&self) -> Arc<ContactState> {
        self.contact.clone()
    }
}
