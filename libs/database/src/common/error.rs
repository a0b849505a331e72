/// Error type for connection management, migrations and health checks
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Errors reported by SeaORM / sqlx
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
