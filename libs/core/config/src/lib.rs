pub mod server;
pub mod tracing;

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development, // Local machine, docker compose
    Production,  // Deployed service, JSON logs
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Static application metadata reported by the health endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Builds an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load and parse environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load and parse environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Returns the first variable in `keys` that is set, with its value
pub fn env_first<'a>(keys: &[&'a str]) -> Option<(&'a str, String)> {
    keys.iter()
        .find_map(|key| env::var(key).ok().map(|value| (*key, value)))
}

/// Parses `value` as `T`, attributing failures to the variable `key`
pub fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
        key: key.to_string(),
        details: e.to_string(),
    })
}

/// Loads `key` (or `default` when unset) and parses it as `T`
pub fn env_parse_or<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_var(key, &env_or_default(key, default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        temp_env::with_var("APP_ENV", Some("PRODUCTION"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });

        temp_env::with_var("APP_ENV", Some("Production"), || {
            assert!(Environment::from_env().is_production());
        });
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_env_or_default_without_value() {
        temp_env::with_var_unset("DISPATCH_MISSING_VAR", || {
            let result = env_or_default("DISPATCH_MISSING_VAR", "default_value");
            assert_eq!(result, "default_value");
        });
    }

    #[test]
    fn test_env_required_missing() {
        temp_env::with_var_unset("DISPATCH_MISSING_REQUIRED", || {
            let err = env_required("DISPATCH_MISSING_REQUIRED").unwrap_err();
            assert!(err.to_string().contains("DISPATCH_MISSING_REQUIRED"));
            assert!(err.to_string().contains("required"));
        });
    }

    #[test]
    fn test_env_first_prefers_earlier_keys() {
        temp_env::with_vars(
            [("DISPATCH_A", Some("first")), ("DISPATCH_B", Some("second"))],
            || {
                assert_eq!(
                    env_first(&["DISPATCH_A", "DISPATCH_B"]),
                    Some(("DISPATCH_A", "first".to_string()))
                );
            },
        );

        temp_env::with_vars(
            [("DISPATCH_A", None), ("DISPATCH_B", Some("second"))],
            || {
                assert_eq!(
                    env_first(&["DISPATCH_A", "DISPATCH_B"]),
                    Some(("DISPATCH_B", "second".to_string()))
                );
            },
        );

        temp_env::with_vars([("DISPATCH_A", None::<&str>), ("DISPATCH_B", None)], || {
            assert!(env_first(&["DISPATCH_A", "DISPATCH_B"]).is_none());
        });
    }

    #[test]
    fn test_env_parse_or_reports_key_on_failure() {
        temp_env::with_var("DISPATCH_NUMBER", Some("ten"), || {
            let err = env_parse_or::<u32>("DISPATCH_NUMBER", "1").unwrap_err();
            assert!(err.to_string().contains("DISPATCH_NUMBER"));
        });

        temp_env::with_var_unset("DISPATCH_NUMBER", || {
            let value: u32 = env_parse_or("DISPATCH_NUMBER", "12").unwrap();
            assert_eq!(value, 12);
        });
    }

    #[test]
    fn test_app_info_macro_uses_package_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert!(!info.version.is_empty());
    }
}
