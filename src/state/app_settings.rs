use log::{LevelFilter, warn};
use std::str::FromStr;
use std::time::Duration;
use tournament_api::client::DEFAULT_API_HOST;

pub const ENV_API_HOST: &str = "TOURNAMENT_SCREEN_API_HOST";
pub const ENV_TIMEOUT_SECS: &str = "TOURNAMENT_SCREEN_TIMEOUT_SECS";
pub const ENV_LOG: &str = "TOURNAMENT_SCREEN_LOG";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub full_screen: bool,
    pub api_host: String,
    /// Transport-level timeout applied to every request.
    pub timeout: Duration,
    pub log_level: LevelFilter,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            api_host: DEFAULT_API_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from a key lookup. Blank or unparsable values keep
    /// the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(host) = value(ENV_API_HOST) {
            settings.api_host = host;
        }

        if let Some(raw) = value(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => settings.timeout = Duration::from_secs(secs),
                _ => warn!("ignoring {ENV_TIMEOUT_SECS}={raw}: expected a positive number of seconds"),
            }
        }

        if let Some(raw) = value(ENV_LOG) {
            match LevelFilter::from_str(&raw) {
                Ok(level) => settings.log_level = level,
                Err(_) => warn!("ignoring {ENV_LOG}={raw}: unknown log level"),
            }
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> AppSettings {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppSettings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        assert_eq!(settings_from(&[]), AppSettings::default());
        assert_eq!(AppSettings::default().api_host, DEFAULT_API_HOST);
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            (ENV_API_HOST, "http://localhost:8080"),
            (ENV_TIMEOUT_SECS, "3"),
            (ENV_LOG, "debug"),
        ]);
        assert_eq!(settings.api_host, "http://localhost:8080");
        assert_eq!(settings.timeout, Duration::from_secs(3));
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let settings = settings_from(&[
            (ENV_API_HOST, "   "),
            (ENV_TIMEOUT_SECS, "0"),
            (ENV_LOG, "loud"),
        ]);
        assert_eq!(settings, AppSettings::default());
    }
}
