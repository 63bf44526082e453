// --- File: crates/accurus_contact/src/doc.rs ---

// Only compile this module if the 'openapi' feature is enabled
#![cfg(feature = "openapi")]

use utoipa::OpenApi;

use crate::faq::FaqEntryView;
use crate::handlers::{FaqPanelResponse, SubmitResponse, TimeSlotsResponse};
use crate::models::{ContactMethod, ContactSubmission};
use crate::schedule::DateBounds;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_form_handler,
        crate::handlers::get_time_slots_handler,
        crate::handlers::get_date_bounds_handler,
        crate::handlers::get_faqs_handler,
        crate::handlers::submit_contact_handler,
    ),
    components(
        schemas(
            ContactSubmission,
            ContactMethod,
            DateBounds,
            TimeSlotsResponse,
            FaqEntryView,
            FaqPanelResponse,
            SubmitResponse,
        )
    ),
    tags(
        (name = "Contact", description = "Contact form, audit scheduling and FAQ")
    )
)]
pub struct ContactApiDoc;
