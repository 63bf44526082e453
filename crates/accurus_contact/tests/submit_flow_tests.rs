//! End-to-end submit workflow against a recording email service.


use accurus_config::EmailJsConfig;
use accurus_contact::{ContactForm, FormField, SubmitError};
use fixtures::{emailjs_settings, full_submission, RecordingMailer};
use std::collections::BTreeMap;
use std::sync::Arc;

fn expected_params() -> BTreeMap<String, String> {
    [
        ("to_name", "AccurusBill Team"),
        ("fullName", "Dana Smith"),
        ("clinicName", "Maple Family Clinic"),
        ("email", "dana@example.com"),
        ("phone", "+1 416 555 0100"),
        ("contactMethod", "Email"),
        ("service", "Growth"),
        ("message", "We are switching EMR systems this fall."),
        ("auditDate", "2025-06-10"),
        ("auditTime", "10:30 AM ET"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[tokio::test]
async fn test_full_form_success_sends_once_and_resets() {
    let form = ContactForm::from_submission(full_submission()).unwrap();
    let mailer = RecordingMailer::accepting();

    let receipt = form
        .submit(&emailjs_settings(), mailer.as_ref())
        .await
        .expect("delivery should succeed");

    assert_eq!(receipt.status_text, "OK");
    let calls = mailer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0.service_id, "service_test");
    assert_eq!(calls[0].0.template_id, "template_contact");
    assert_eq!(calls[0].0.public_key, "pk_test");
    assert_eq!(calls[0].1, expected_params());

    let after = form.snapshot();
    for field in FormField::ALL {
        assert_eq!(after.get(field), "", "{} not reset", field.name());
    }
}

#[tokio::test]
async fn test_full_form_rejection_reports_and_resets() {
    let form = ContactForm::from_submission(full_submission()).unwrap();
    let mailer = RecordingMailer::rejecting("Quota exceeded");

    let err = form
        .submit(&emailjs_settings(), mailer.as_ref())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SubmitError::DeliveryFailed {
            detail: Some("Quota exceeded".to_string())
        }
    );
    assert_eq!(mailer.call_count(), 1);
    assert!(form.snapshot().is_empty());
}

#[tokio::test]
async fn test_missing_credentials_make_no_call_and_keep_fields() {
    let form = ContactForm::from_submission(full_submission()).unwrap();
    let mailer = RecordingMailer::accepting();

    let err = form
        .submit(&EmailJsConfig::default(), mailer.as_ref())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SubmitError::ConfigurationMissing {
            missing: vec!["service_id", "template_id", "public_key"]
        }
    );
    assert_eq!(mailer.call_count(), 0);
    assert_eq!(form.snapshot(), full_submission());
}

#[tokio::test]
async fn test_second_submit_while_pending_is_rejected() {
    let form = Arc::new(ContactForm::from_submission(full_submission()).unwrap());
    let mailer = RecordingMailer::holding();

    let first = {
        let form = form.clone();
        let mailer = mailer.clone();
        tokio::spawn(async move {
            let settings = emailjs_settings();
            let outcome = form.submit(&settings, mailer.as_ref()).await;
            outcome
        })
    };

    mailer.started.notified().await;
    assert!(form.is_submitting());

    let second = form.submit(&emailjs_settings(), mailer.as_ref()).await;
    assert_eq!(second.unwrap_err(), SubmitError::InFlight);
    assert_eq!(mailer.call_count(), 1);
    assert_eq!(form.snapshot(), full_submission(), "pending submit must not be disturbed");

    mailer.release.notify_one();
    let first = first.await.unwrap();
    assert!(first.is_ok());
    assert!(!form.is_submitting());
    assert!(form.snapshot().is_empty());

    // Settled, so the form accepts a new attempt
    let third = form.submit(&EmailJsConfig::default(), mailer.as_ref()).await;
    assert!(matches!(third, Err(SubmitError::ConfigurationMissing { .. })));
}
