use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse_or, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`, default true)
    pub run_migrations: bool,
    /// Load demo regions, couriers and tasks into an empty database (`SEED_DEMO_DATA`)
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Defaults: HOST=0.0.0.0, PORT=7777

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            run_migrations: env_parse_or("RUN_MIGRATIONS", "true")?,
            seed_demo_data: env_parse_or("SEED_DEMO_DATA", "false")?,
        })
    }
}
