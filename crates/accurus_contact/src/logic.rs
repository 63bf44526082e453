// --- File: crates/accurus_contact/src/logic.rs ---
//! The contact form controller: field state, scheduling selections and the
//! submit workflow.

use crate::error::{ContactError, SubmitError};
use crate::models::{ContactSubmission, FormField};
use accurus_common::services::{EmailCredentials, EmailService, TemplateParams};
use accurus_config::EmailJsConfig;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Placeholder sent for every empty field.
pub const NOT_PROVIDED: &str = "Not provided";
/// Audit times are Eastern Time; the suffix makes that explicit in the email.
pub const AUDIT_TIME_SUFFIX: &str = " ET";
pub const SUCCESS_MESSAGE: &str =
    "Submission received successfully! We'll get back to you soon.";

/// Flattens a submission into EmailJS template parameters.
///
/// Every field is present; empty ones read [`NOT_PROVIDED`]. A selected audit
/// time gets [`AUDIT_TIME_SUFFIX`].
pub fn build_template_params(submission: &ContactSubmission, to_name: &str) -> TemplateParams {
    let mut params = TemplateParams::new();
    params.insert("to_name".to_string(), to_name.to_string());

    for field in FormField::ALL {
        let value = submission.get(field);
        let rendered = if value.is_empty() {
            NOT_PROVIDED.to_string()
        } else if field == FormField::AuditTime {
            format!("{}{}", value, AUDIT_TIME_SUFFIX)
        } else {
            value.to_string()
        };
        params.insert(field.name().to_string(), rendered);
    }

    params
}

/// Builds the delivery credentials, or names the ones that are missing.
fn credentials_from(settings: &EmailJsConfig) -> Result<EmailCredentials, SubmitError> {
    let value = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
    };

    match (
        value(&settings.service_id),
        value(&settings.template_id),
        value(&settings.public_key),
    ) {
        (Some(service_id), Some(template_id), Some(public_key)) => Ok(EmailCredentials {
            service_id,
            template_id,
            public_key,
        }),
        _ => Err(SubmitError::ConfigurationMissing {
            missing: settings.missing_credentials(),
        }),
    }
}

/// Outcome of a delivered submission.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SubmitReceipt {
    /// Correlates the attempt with the server logs.
    pub submission_id: Uuid,
    /// Status text returned by the email provider, normally "OK".
    pub status_text: String,
}

/// Clears the in-flight flag when the attempt settles, on every path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Deliveries still pending across requests, keyed by submitter.
///
/// The email address identifies the submitter, the full name stands in when no
/// email was given. Anonymous submissions share one key.
#[derive(Debug, Default)]
pub struct PendingSubmissions {
    keys: Mutex<HashSet<String>>,
}

/// Holds a submitter's slot in [`PendingSubmissions`] until dropped.
#[derive(Debug)]
pub struct PendingGuard<'a> {
    pending: &'a PendingSubmissions,
    key: String,
}

impl PendingSubmissions {
    pub fn new() -> Self {
        Self::default()
    }

    fn keys(&self) -> MutexGuard<'_, HashSet<String>> {
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claims the submitter's slot, or `InFlight` while an earlier delivery
    /// for the same submitter has not settled.
    pub fn try_begin(
        &self,
        submission: &ContactSubmission,
    ) -> Result<PendingGuard<'_>, SubmitError> {
        let key = submitter_key(submission);
        if !self.keys().insert(key.clone()) {
            warn!("Submit refused, a delivery for this submitter is still pending");
            return Err(SubmitError::InFlight);
        }
        Ok(PendingGuard { pending: self, key })
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.pending.keys().remove(&self.key);
    }
}

fn submitter_key(submission: &ContactSubmission) -> String {
    let email = submission.email.trim();
    let key = if email.is_empty() {
        submission.full_name.trim()
    } else {
        email
    };
    key.to_lowercase()
}

/// State of one contact form.
///
/// Shared by reference (or `Arc`) between whatever drives it; all methods take
/// `&self`. The field lock is never held across the delivery call.
#[derive(Debug, Default)]
pub struct ContactForm {
    state: Mutex<ContactSubmission>,
    in_flight: AtomicBool,
}

impl ContactForm {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty form with the service pre-selected from the `plan` query
    /// parameter. A missing or empty plan leaves the service empty.
    pub fn with_plan(plan: Option<&str>) -> Self {
        let form = Self::new();
        if let Some(plan) = plan.filter(|p| !p.is_empty()) {
            debug!("Pre-selecting service from plan {:?}", plan);
            form.state().service = plan.to_string();
        }
        form
    }

    /// A form holding an already complete submission, e.g. a JSON body.
    pub fn from_submission(submission: ContactSubmission) -> Result<Self, ContactError> {
        submission.validate()?;
        Ok(Self {
            state: Mutex::new(submission),
            in_flight: AtomicBool::new(false),
        })
    }

    // The submission is plain data, a panic elsewhere cannot leave it half-written.
    fn state(&self) -> MutexGuard<'_, ContactSubmission> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces one field; every other field keeps its value.
    pub fn update_field(&self, field: FormField, value: &str) -> Result<(), ContactError> {
        self.state().set(field, value)
    }

    /// [`update_field`](Self::update_field) addressed by wire name, e.g. `"clinicName"`.
    pub fn update_named_field(&self, name: &str, value: &str) -> Result<(), ContactError> {
        let field: FormField = name.parse()?;
        self.update_field(field, value)
    }

    pub fn snapshot(&self) -> ContactSubmission {
        self.state().clone()
    }

    /// Empties every field and the three scheduling selections.
    pub fn reset(&self) {
        *self.state() = ContactSubmission::default();
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Sends the current submission through `mailer`.
    ///
    /// * Missing credentials: no delivery attempt, fields kept.
    /// * Delivered or rejected: exactly one attempt, fields reset afterwards.
    /// * Called while another submit is pending: `InFlight`, nothing touched.
    pub async fn submit<S>(
        &self,
        settings: &EmailJsConfig,
        mailer: &S,
    ) -> Result<SubmitReceipt, SubmitError>
    where
        S: EmailService + ?Sized,
    {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("Submit ignored, a previous submission has not settled");
            return Err(SubmitError::InFlight);
        };

        let submission_id = Uuid::new_v4();
        let span = info_span!("contact_submit", %submission_id);

        async move {
            let submission = self.snapshot();

            let credentials = credentials_from(settings).inspect_err(|err| {
                error!("🚨 Missing EmailJS credentials, submission not sent: {}", err);
            })?;

            let params = build_template_params(&submission, settings.to_name());
            debug!(
                "Delivering contact submission via service {} template {}",
                credentials.service_id, credentials.template_id
            );

            let outcome = match mailer.send_template(&credentials, &params).await {
                Ok(receipt) => {
                    info!("✅ Email successfully sent: {}", receipt.text);
                    Ok(SubmitReceipt {
                        submission_id,
                        status_text: receipt.text,
                    })
                }
                Err(err) => {
                    let detail = Some(err.to_string()).filter(|d| !d.trim().is_empty());
                    match &detail {
                        Some(message) => error!("🚨 Error sending email: {}", message),
                        None => error!("🚨 Error sending email: {:?}", err),
                    }
                    Err(SubmitError::DeliveryFailed { detail })
                }
            };

            self.reset();
            outcome
        }
        .instrument(span)
        .await
    }
}
