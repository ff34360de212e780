use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use dotenv::dotenv;
use tracing::{debug, warn};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_HEALTH_POLL_SECS: u64 = 300;
const DEFAULT_CONTACT_RESET_MS: u64 = 2500;
const DEFAULT_PREFERENCES_PATH: &str = "portfolio-preferences.json";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Externally reachable API origin, without a trailing slash.
    pub api_base_url: String,
    pub health_poll_interval: Duration,
    /// How long the contact form shows its confirmation before resetting.
    pub contact_reset_delay: Duration,
    pub preferences_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            health_poll_interval: Duration::from_secs(DEFAULT_HEALTH_POLL_SECS),
            contact_reset_delay: Duration::from_millis(DEFAULT_CONTACT_RESET_MS),
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        ClientConfig {
            api_base_url: env::var("APP_API_BASE_URL")
                .ok()
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            health_poll_interval: Duration::from_secs(
                try_load("APP_HEALTH_POLL_SECS", DEFAULT_HEALTH_POLL_SECS).max(1)
            ),
            contact_reset_delay: Duration::from_millis(
                try_load("APP_CONTACT_RESET_MS", DEFAULT_CONTACT_RESET_MS)
            ),
            preferences_path: env::var("APP_PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_PREFERENCES_PATH)),
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default {default}");
            default
        }),
        Err(_) => {
            debug!("{key} not set, using default: {default}");
            default
        }
    }
}
