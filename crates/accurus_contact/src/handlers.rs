// File: crates/accurus_contact/src/handlers.rs
use crate::faq::{FaqEntryView, FaqPanel};
use crate::logic::{ContactForm, PendingSubmissions, SUCCESS_MESSAGE};
use crate::models::{ContactSubmission, PlanQuery};
use crate::schedule::{business_time_zone, date_bounds_now, time_slot_labels, DateBounds};
use accurus_common::services::{BoxedError, EmailService};
use accurus_common::{config_error, AccurusError};
use accurus_config::AppConfig;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Shared state for the contact routes.
pub struct ContactState {
    pub config: Arc<AppConfig>,
    /// `None` when no email service could be built at start-up.
    pub mailer: Option<Arc<dyn EmailService<Error = BoxedError>>>,
    /// Deliveries in progress, so a repeated submit gets 409 instead of a second email.
    pub pending: PendingSubmissions,
}

impl ContactState {
    pub fn new(
        config: Arc<AppConfig>,
        mailer: Option<Arc<dyn EmailService<Error = BoxedError>>>,
    ) -> Self {
        Self {
            config,
            mailer,
            pending: PendingSubmissions::new(),
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TimeSlotsResponse {
    pub slots: Vec<String>,
    /// Zone the slots are expressed in.
    #[cfg_attr(feature = "openapi", schema(example = "ET"))]
    pub time_zone: String,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct FaqQuery {
    /// Index of the expanded question, if any.
    pub open: Option<usize>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FaqPanelResponse {
    pub open: Option<usize>,
    pub items: Vec<FaqEntryView>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SubmitResponse {
    pub success: bool,
    pub submission_id: Uuid,
    pub message: String,
}

/// Initial form state, with the service taken from `?plan=`.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/contact/form",
    params(PlanQuery),
    responses(
        (status = 200, description = "Empty form, service pre-selected from the plan",
            body = ContactSubmission)
    ),
    tag = "Contact"
))]
pub async fn get_form_handler(Query(query): Query<PlanQuery>) -> Json<ContactSubmission> {
    Json(ContactForm::with_plan(query.plan.as_deref()).snapshot())
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/contact/time-slots",
    responses(
        (status = 200, description = "Bookable audit start times", body = TimeSlotsResponse)
    ),
    tag = "Contact"
))]
pub async fn get_time_slots_handler() -> Json<TimeSlotsResponse> {
    Json(TimeSlotsResponse {
        slots: time_slot_labels(),
        time_zone: "ET".to_string(),
    })
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/contact/date-bounds",
    responses(
        (status = 200, description = "Selectable audit dates, today through three months ahead",
            body = DateBounds)
    ),
    tag = "Contact"
))]
pub async fn get_date_bounds_handler(
    State(state): State<Arc<ContactState>>,
) -> Json<DateBounds> {
    Json(date_bounds_now(business_time_zone(&state.config.contact)))
}

#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/contact/faqs",
    params(FaqQuery),
    responses(
        (status = 200, description = "FAQ list, answer shown for the open entry only",
            body = FaqPanelResponse),
        (status = 400, description = "Open index out of range")
    ),
    tag = "Contact"
))]
pub async fn get_faqs_handler(
    Query(query): Query<FaqQuery>,
) -> Result<Json<FaqPanelResponse>, AccurusError> {
    let panel = FaqPanel::with_open(query.open)?;
    Ok(Json(FaqPanelResponse {
        open: panel.open_index(),
        items: panel.view(),
    }))
}

/// Runs the submit workflow for one contact request.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/contact/submit",
    params(PlanQuery),
    request_body = ContactSubmission,
    responses(
        (status = 200, description = "Submission emailed", body = SubmitResponse),
        (status = 400, description = "Malformed body, invalid contact method or audit time"),
        (status = 409, description = "Same sender still being delivered"),
        (status = 500, description = "Email delivery is not configured"),
        (status = 502, description = "Email provider rejected the submission")
    ),
    tag = "Contact"
))]
pub async fn submit_contact_handler(
    State(state): State<Arc<ContactState>>,
    Query(query): Query<PlanQuery>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<SubmitResponse>, AccurusError> {
    let Json(mut submission) = payload?;
    if submission.service.is_empty() {
        if let Some(plan) = query.plan.filter(|p| !p.is_empty()) {
            submission.service = plan;
        }
    }
    let form = ContactForm::from_submission(submission)?;

    let mailer = state.mailer.as_ref().ok_or_else(|| {
        error!("No email service available, check the [emailjs] configuration");
        config_error("Configuration error. Please contact support.")
    })?;

    let _pending = state.pending.try_begin(&form.snapshot())?;
    let receipt = form.submit(&state.config.emailjs, mailer.as_ref()).await?;
    info!("Contact submission {} delivered", receipt.submission_id);

    Ok(Json(SubmitResponse {
        success: true,
        submission_id: receipt.submission_id,
        message: SUCCESS_MESSAGE.to_string(),
    }))
}
