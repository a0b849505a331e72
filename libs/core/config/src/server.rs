use crate::{env_first, env_or_default, parse_var, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Port the dispatch API listens on when nothing else is configured
pub const DEFAULT_PORT: u16 = 7777;

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST: defaults to Ipv4Addr::UNSPECIFIED (0.0.0.0 - all interfaces)
    /// - PORT, then TM_APP_PORT: defaults to 7777
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = match env_first(&["PORT", "TM_APP_PORT"]) {
            Some((key, raw)) => parse_var(key, &raw)?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_env_with_defaults() {
        temp_env::with_vars(
            [
                ("HOST", None::<&str>),
                ("PORT", None),
                ("TM_APP_PORT", None),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.host, "0.0.0.0");
                assert_eq!(config.port, 7777);
                assert_eq!(config.address(), "0.0.0.0:7777");
            },
        );
    }

    #[test]
    fn test_server_config_legacy_port_variable() {
        temp_env::with_vars(
            [("PORT", None::<&str>), ("TM_APP_PORT", Some("9000"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.port, 9000);
            },
        );
    }

    #[test]
    fn test_server_config_port_wins_over_legacy_variable() {
        temp_env::with_vars(
            [
                ("HOST", Some("127.0.0.1")),
                ("PORT", Some("3000")),
                ("TM_APP_PORT", Some("9000")),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "127.0.0.1:3000");
            },
        );
    }

    #[test]
    fn test_server_config_from_env_invalid_port() {
        temp_env::with_vars(
            [("PORT", Some("not_a_number")), ("TM_APP_PORT", None)],
            || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("PORT"));
            },
        );
    }

    #[test]
    fn test_server_config_invalid_legacy_port_names_it() {
        temp_env::with_vars(
            [("PORT", None::<&str>), ("TM_APP_PORT", Some("eighty"))],
            || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("'TM_APP_PORT'"));
            },
        );
    }

    #[test]
    fn test_server_config_from_env_port_out_of_range() {
        temp_env::with_var("PORT", Some("99999"), || {
            let result = ServerConfig::from_env();
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, Ipv4Addr::UNSPECIFIED.to_string());
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
