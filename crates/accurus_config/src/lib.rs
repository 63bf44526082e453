use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

pub mod env_vars;
pub mod models;
pub use models::*;

use env_vars::{config_path_to_env_var, get_config_prefix, secret_path_to_env_var, SECRET_MARKER};

/// Loads the application configuration.
///
/// Sources, later ones winning: `<CONFIG_DIR>/default.*`, `<CONFIG_DIR>/<RUN_ENV>.*`,
/// then `ACCURUS__SECTION__KEY` environment variables. `CONFIG_DIR` defaults to
/// `config` and `RUN_ENV` to `debug`. Finally every `"secret_from_env"` marker is
/// resolved from the environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    load_config_from(&config_dir, &run_env)
}

/// Loads the configuration from an explicit directory and environment name.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, ConfigError> {
    let prefix = get_config_prefix();
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .prefix_separator("__")
                .separator("__"),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides_from_marker(raw_config)
}

/// Recursively replaces all "secret_from_env" string values with environment variable values.
///
/// A marker whose variable is not set becomes `null`, so optional settings read as absent
/// instead of carrying the marker text.
fn inject_env_secrets(value: &mut Value) {
    fn walk(path: Vec<String>, obj: &mut Value) {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    walk(new_path, v);
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let env_key = secret_path_to_env_var(&path);
                match env::var(&env_key) {
                    Ok(env_val) => *obj = Value::String(env_val),
                    Err(_) => {
                        warn!(
                            "env var {} (or {}) not set for secret_from_env",
                            env_key,
                            config_path_to_env_var(&path.join("."))
                        );
                        *obj = Value::Null;
                    }
                }
            }
            _ => {}
        }
    }

    walk(vec![], value);
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    inject_env_secrets(&mut json);
    serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to apply env secrets: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file defaults to `.env` and can be redirected with `DOTENV_OVERRIDE`.
/// Loading happens at most once per process; the path is returned for logging.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
