#[cfg(test)]
mod tests {
    use crate::error::{ContactError, SubmitError};
    use crate::logic::{build_template_params, ContactForm, PendingSubmissions, NOT_PROVIDED};
    use crate::models::{ContactMethod, ContactSubmission, FormField};
    use accurus_common::services::{
        BoxFuture, EmailCredentials, EmailReceipt, EmailService, TemplateParams,
    };
    use accurus_config::EmailJsConfig;
    use std::sync::Mutex;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("{0}")]
    struct FakeError(String);

    /// Records calls and answers with a fixed reply.
    struct FakeMailer {
        calls: Mutex<Vec<(EmailCredentials, TemplateParams)>>,
        reply: Result<EmailReceipt, String>,
    }

    impl FakeMailer {
        fn accepting() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply: Ok(EmailReceipt {
                    status: 200,
                    text: "OK".to_string(),
                }),
            }
        }

        fn rejecting(message: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                reply: Err(message.to_string()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl EmailService for FakeMailer {
        type Error = FakeError;

        fn send_template(
            &self,
            credentials: &EmailCredentials,
            params: &TemplateParams,
        ) -> BoxFuture<'_, EmailReceipt, Self::Error> {
            self.calls
                .lock()
                .unwrap()
                .push((credentials.clone(), params.clone()));
            let reply = self.reply.clone().map_err(FakeError);
            Box::pin(async move { reply })
        }
    }

    fn settings() -> EmailJsConfig {
        EmailJsConfig {
            service_id: Some("service_1".to_string()),
            template_id: Some("template_1".to_string()),
            public_key: Some("pk_1".to_string()),
            ..Default::default()
        }
    }

    fn filled_form() -> ContactForm {
        let form = ContactForm::with_plan(Some("Growth"));
        form.update_field(FormField::ClinicName, "Maple Family Clinic").unwrap();
        form.update_field(FormField::FullName, "Dana Smith").unwrap();
        form.update_field(FormField::Email, "dana@example.com").unwrap();
        form.update_field(FormField::ContactMethod, "Phone").unwrap();
        form.update_field(FormField::AuditDate, "2025-06-10").unwrap();
        form.update_field(FormField::AuditTime, "10:30 AM").unwrap();
        form
    }

    fn sample_value(field: FormField) -> &'static str {
        match field {
            FormField::ContactMethod => "Email",
            FormField::AuditTime => "3:15 PM",
            _ => "some value",
        }
    }

    #[test]
    fn test_update_field_touches_only_that_field() {
        for field in FormField::ALL {
            let form = filled_form();
            let before = form.snapshot();

            let value = if before.get(field) == sample_value(field) {
                ""
            } else {
                sample_value(field)
            };
            form.update_field(field, value).unwrap();
            let after = form.snapshot();

            assert_eq!(after.get(field), value, "field {:?}", field);
            for other in FormField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(after.get(other), before.get(other), "{:?} changed", other);
            }
        }
    }

    #[test]
    fn test_update_named_field() {
        let form = ContactForm::new();
        form.update_named_field("clinicName", "Harbour Physio").unwrap();
        assert_eq!(form.snapshot().clinic_name, "Harbour Physio");

        assert_eq!(
            form.update_named_field("fax", "123"),
            Err(ContactError::UnknownField("fax".to_string()))
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let form = filled_form();
        let before = form.snapshot();

        assert!(matches!(
            form.update_field(FormField::ContactMethod, "Carrier pigeon"),
            Err(ContactError::InvalidContactMethod(_))
        ));
        assert!(matches!(
            form.update_field(FormField::AuditTime, "6:00 PM"),
            Err(ContactError::InvalidTimeSlot(_))
        ));
        assert_eq!(form.snapshot(), before);
    }

    #[test]
    fn test_with_plan() {
        assert_eq!(ContactForm::with_plan(Some("Starter")).snapshot().service, "Starter");
        assert!(ContactForm::with_plan(Some("")).snapshot().is_empty());
        assert!(ContactForm::with_plan(None).snapshot().is_empty());
    }

    #[test]
    fn test_from_submission_validates_audit_time() {
        let submission = ContactSubmission {
            audit_time: "10:31 AM".to_string(),
            ..Default::default()
        };
        assert!(ContactForm::from_submission(submission).is_err());

        let submission = ContactSubmission {
            audit_time: "10:30 AM".to_string(),
            contact_method: ContactMethod::Email,
            ..Default::default()
        };
        let form = ContactForm::from_submission(submission.clone()).unwrap();
        assert_eq!(form.snapshot(), submission);
    }

    #[test]
    fn test_template_params_all_empty() {
        let params = build_template_params(&ContactSubmission::default(), "AccurusBill Team");

        assert_eq!(params.len(), 10);
        assert_eq!(params["to_name"], "AccurusBill Team");
        for field in FormField::ALL {
            assert_eq!(params[field.name()], NOT_PROVIDED, "{}", field.name());
        }
    }

    #[test]
    fn test_template_params_audit_time_suffix() {
        let submission = ContactSubmission {
            full_name: "Dana Smith".to_string(),
            audit_time: "10:30 AM".to_string(),
            contact_method: ContactMethod::Phone,
            ..Default::default()
        };
        let params = build_template_params(&submission, "AccurusBill Team");

        assert_eq!(params["auditTime"], "10:30 AM ET");
        assert_eq!(params["fullName"], "Dana Smith");
        assert_eq!(params["contactMethod"], "Phone");
        assert_eq!(params["auditDate"], NOT_PROVIDED);
    }

    #[tokio::test]
    async fn test_submit_success_resets_form() {
        let form = filled_form();
        let mailer = FakeMailer::accepting();

        let receipt = form.submit(&settings(), &mailer).await.unwrap();

        assert_eq!(receipt.status_text, "OK");
        assert_eq!(mailer.call_count(), 1);
        assert!(form.snapshot().is_empty());
        assert!(!form.is_submitting());

        let calls = mailer.calls.lock().unwrap();
        let (credentials, params) = &calls[0];
        assert_eq!(credentials.service_id, "service_1");
        assert_eq!(credentials.template_id, "template_1");
        assert_eq!(credentials.public_key, "pk_1");
        assert_eq!(params["service"], "Growth");
        assert_eq!(params["auditTime"], "10:30 AM ET");
        assert_eq!(params["phone"], NOT_PROVIDED);
    }

    #[tokio::test]
    async fn test_submit_rejection_still_resets_form() {
        let form = filled_form();
        let mailer = FakeMailer::rejecting("The public key is required");

        let err = form.submit(&settings(), &mailer).await.unwrap_err();

        assert_eq!(
            err,
            SubmitError::DeliveryFailed {
                detail: Some("The public key is required".to_string())
            }
        );
        assert_eq!(mailer.call_count(), 1);
        assert!(form.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejection_without_description() {
        let form = filled_form();
        let mailer = FakeMailer::rejecting("");

        let err = form.submit(&settings(), &mailer).await.unwrap_err();
        assert_eq!(err, SubmitError::DeliveryFailed { detail: None });
    }

    #[tokio::test]
    async fn test_submit_without_credentials_keeps_form() {
        for missing in ["service_id", "template_id", "public_key"] {
            let mut settings = settings();
            match missing {
                "service_id" => settings.service_id = None,
                "template_id" => settings.template_id = Some(String::new()),
                _ => settings.public_key = None,
            }
            let form = filled_form();
            let before = form.snapshot();
            let mailer = FakeMailer::accepting();

            let err = form.submit(&settings, &mailer).await.unwrap_err();

            assert_eq!(
                err,
                SubmitError::ConfigurationMissing {
                    missing: vec![missing]
                }
            );
            assert_eq!(mailer.call_count(), 0);
            assert_eq!(form.snapshot(), before);
            assert!(!form.is_submitting());
        }
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            SubmitError::ConfigurationMissing { missing: vec![] }.user_message(),
            "Configuration error. Please contact support."
        );
        assert_eq!(
            SubmitError::DeliveryFailed { detail: None }.user_message(),
            "Failed to send the submission. Please try again."
        );
    }

    #[test]
    fn test_pending_submissions_are_keyed_by_submitter() {
        let pending = PendingSubmissions::new();
        let dana = filled_form().snapshot();
        let other = ContactSubmission {
            email: "lee@example.com".to_string(),
            ..Default::default()
        };

        let guard = pending.try_begin(&dana).unwrap();
        assert_eq!(pending.try_begin(&dana).unwrap_err(), SubmitError::InFlight);

        // Same address in another case is the same sender
        let shouting = ContactSubmission {
            email: " DANA@EXAMPLE.COM ".to_string(),
            ..Default::default()
        };
        assert!(pending.try_begin(&shouting).is_err());

        let other_guard = pending.try_begin(&other).unwrap();
        assert_eq!(pending.len(), 2);

        drop(guard);
        drop(other_guard);
        assert!(pending.is_empty());
        assert!(pending.try_begin(&dana).is_ok());
    }
}
