// --- File: crates/accurus_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- EmailJS Config ---
// Credentials are normally "secret_from_env" markers in the config file and
// resolved from EMAILJS_SERVICE_ID / EMAILJS_TEMPLATE_ID / EMAILJS_PUBLIC_KEY.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EmailJsConfig {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    /// Private key, only needed when the EmailJS account enforces it for
    /// non-browser callers.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Recipient name passed to the template as `to_name`.
    #[serde(default)]
    pub to_name: Option<String>,
}

impl EmailJsConfig {
    pub const DEFAULT_API_URL: &'static str = "https://api.emailjs.com/api/v1.0/email/send";
    pub const DEFAULT_TO_NAME: &'static str = "AccurusBill Team";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn api_url(&self) -> &str {
        non_blank(&self.api_url).unwrap_or(Self::DEFAULT_API_URL)
    }

    pub fn to_name(&self) -> &str {
        non_blank(&self.to_name).unwrap_or(Self::DEFAULT_TO_NAME)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(Self::DEFAULT_TIMEOUT_SECS)
    }

    pub fn access_token(&self) -> Option<&str> {
        non_blank(&self.access_token)
    }

    /// Names of the delivery credentials that are absent or blank.
    ///
    /// An empty result means all three credentials are usable.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| non_blank(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

// --- Contact Page Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ContactConfig {
    /// IANA zone used for "today" in the audit date picker, e.g. "America/New_York".
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl ContactConfig {
    pub const DEFAULT_TIME_ZONE: &'static str = "America/New_York";

    pub fn time_zone(&self) -> &str {
        non_blank(&self.time_zone).unwrap_or(Self::DEFAULT_TIME_ZONE)
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
