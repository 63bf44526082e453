// --- File: crates/accurus_contact/src/routes.rs ---

use crate::handlers::{
    get_date_bounds_handler, get_faqs_handler, get_form_handler, get_time_slots_handler,
    submit_contact_handler, ContactState,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all routes for the contact page.
pub fn routes(state: Arc<ContactState>) -> Router {
    Router::new()
        .route("/contact/form", get(get_form_handler))
        .route("/contact/time-slots", get(get_time_slots_handler))
        .route("/contact/date-bounds", get(get_date_bounds_handler))
        .route("/contact/faqs", get(get_faqs_handler))
        .route("/contact/submit", post(submit_contact_handler))
        .with_state(state)
}
