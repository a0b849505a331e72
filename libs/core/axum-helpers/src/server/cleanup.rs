//! Connection cleanup run during graceful shutdown.

use tracing::{error, info};

/// Closes a SeaORM pool and logs the outcome.
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!(pool = name, "PostgreSQL connection pool closed"),
        Err(e) => error!(pool = name, "Error closing PostgreSQL connection pool: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_close_mock_connection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        close_postgres(db, "test").await;
    }
}
