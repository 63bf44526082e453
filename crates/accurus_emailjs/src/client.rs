use accurus_common::create_client;
use accurus_common::services::{
    BoxFuture, EmailCredentials, EmailReceipt, EmailService, TemplateParams,
};
use accurus_config::EmailJsConfig;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// EmailJS-specific error types.
#[derive(Error, Debug)]
pub enum EmailJsError {
    /// Error occurred during an EmailJS API request
    #[error("EmailJS API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the EmailJS API. Displays the API's own text, which
    /// is empty when the rejection carried no body.
    #[error("{message}")]
    ApiError { status_code: u16, message: String },
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Serialize, Debug)]
struct SendEmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    /// EmailJS calls the public key `user_id` on the REST API.
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Client for the EmailJS template send endpoint.
#[derive(Clone, Debug)]
pub struct EmailJsClient {
    http: Client,
    api_url: String,
    access_token: Option<String>,
}

impl EmailJsClient {
    /// Build a client from the `[emailjs]` config section.
    pub fn new(config: &EmailJsConfig) -> Result<Self, EmailJsError> {
        let http = create_client(config.timeout_secs(), true)?;
        Ok(Self::with_client(
            http,
            config.api_url(),
            config.access_token().map(String::from),
        ))
    }

    pub fn with_client(http: Client, api_url: &str, access_token: Option<String>) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            access_token,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Sends one templated email. Exactly one HTTP request is made.
    pub async fn send(
        &self,
        credentials: &EmailCredentials,
        params: &TemplateParams,
    ) -> Result<EmailReceipt, EmailJsError> {
        let request = SendEmailRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: params,
            access_token: self.access_token.as_deref(),
        };
        debug!(
            "Sending EmailJS template {} via service {} ({} params)",
            credentials.template_id,
            credentials.service_id,
            params.len()
        );

        let resp = self.http.post(&self.api_url).json(&request).send().await?;

        let status = resp.status();
        let body = resp.text().await;

        if !status.is_success() {
            let message = body.unwrap_or_else(|e| {
                warn!("Could not read EmailJS error body: {}", e);
                String::new()
            });
            error!("EmailJS returned {}: {}", status, message);
            return Err(EmailJsError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let text = accepted_text(status, body);
        info!("EmailJS accepted template {}: {}", credentials.template_id, text);
        Ok(EmailReceipt {
            status: status.as_u16(),
            text,
        })
    }
}

/// Status text of an accepted send. An unreadable body falls back to the
/// status reason, the email has already been accepted at that point.
pub(crate) fn accepted_text(status: StatusCode, body: Result<String, reqwest::Error>) -> String {
    match body {
        Ok(text) => text,
        Err(e) => {
            warn!("EmailJS accepted the send but its response body could not be read: {}", e);
            status.canonical_reason().unwrap_or_default().to_string()
        }
    }
}

impl EmailService for EmailJsClient {
    type Error = EmailJsError;

    fn send_template(
        &self,
        credentials: &EmailCredentials,
        params: &TemplateParams,
    ) -> BoxFuture<'_, EmailReceipt, Self::Error> {
        // Owned copies so the future only borrows `self`
        let credentials = credentials.clone();
        let params = params.clone();

        Box::pin(async move { self.send(&credentials, &params).await })
    }
}
