//! Application state management.
//!
//! Shared state handed to the route builders and the readiness handler.

/// Shared application state.
///
/// Cloning is cheap: the connection pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
