//! Environment variable naming for the AccurusBill services.
//!
//! Two patterns are in use: structured overrides for any config path
//! (`ACCURUS__EMAILJS__TO_NAME`) and flat names for secrets referenced by a
//! `"secret_from_env"` marker (`EMAILJS_PUBLIC_KEY`).

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "ACCURUS";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Marker value in config files for values that must come from the environment.
pub const SECRET_MARKER: &str = "secret_from_env";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// `"emailjs.to_name"` becomes `"ACCURUS__EMAILJS__TO_NAME"`.
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to an environment variable name
///
/// `["emailjs", "public_key"]` becomes `"EMAILJS_PUBLIC_KEY"`.
pub fn secret_path_to_env_var<S: AsRef<str>>(path: &[S]) -> String {
    path.iter()
        .map(|segment| segment.as_ref())
        .collect::<Vec<_>>()
        .join(SECRET_SEPARATOR)
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_to_env_var() {
        assert_eq!(
            config_path_to_env_var("server.host"),
            "ACCURUS__SERVER__HOST"
        );
        assert_eq!(
            config_path_to_env_var("emailjs.service_id"),
            "ACCURUS__EMAILJS__SERVICE_ID"
        );
    }

    #[test]
    fn test_secret_path_to_env_var() {
        assert_eq!(
            secret_path_to_env_var(&["emailjs", "public_key"]),
            "EMAILJS_PUBLIC_KEY"
        );
        assert_eq!(
            secret_path_to_env_var(&["emailjs".to_string(), "template_id".to_string()]),
            "EMAILJS_TEMPLATE_ID"
        );
    }
}
