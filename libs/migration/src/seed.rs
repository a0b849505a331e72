//! Demo data for local runs.
//!
//! Not a migration: it only runs when asked for, and only into an empty
//! `regions` table, so restarting a seeded instance is harmless.

use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseBackend, DbErr, Statement};
use tracing::info;

const SEED_SQL: &str = r#"
INSERT INTO regions (name) VALUES ('Central'), ('North'), ('Riverside');

INSERT INTO couriers (full_name, region_id, max_cells)
SELECT c.full_name, r.id, c.max_cells
FROM (VALUES
    ('Anna Petrova', 'Central', 10),
    ('Ivan Sokolov', 'Central', 6),
    ('Maria Lebedeva', 'North', 8)
) AS c(full_name, region_name, max_cells)
JOIN regions r ON r.name = c.region_name;

INSERT INTO tasks (description, cells, region_id, address, courier_id)
SELECT t.description, t.cells, c.region_id, t.address, c.id
FROM (VALUES
    ('Groceries', 3, 'Anna Petrova', '12 Market Street'),
    ('Pharmacy order', 1, 'Anna Petrova', '4 Linden Avenue'),
    ('Furniture parts', 5, 'Ivan Sokolov', '88 Station Road'),
    ('Documents', 1, 'Maria Lebedeva', '2 Harbour Lane')
) AS t(description, cells, courier_name, address)
JOIN couriers c ON c.full_name = t.courier_name;
"#;

/// Inserts three regions, three couriers and a handful of tasks that respect
/// both assignment rules. Returns `false` when data already exists.
pub async fn seed_demo_data<C: ConnectionTrait>(db: &C) -> Result<bool, DbErr> {
    let existing = db
        .query_one_raw(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT COUNT(*)::BIGINT AS count FROM regions".to_owned(),
        ))
        .await?
        .map(|row| row.try_get::<i64>("", "count"))
        .transpose()?
        .unwrap_or(0);

    if existing > 0 {
        info!(regions = existing, "Skipping demo seed, data already present");
        return Ok(false);
    }

    db.execute_unprepared(SEED_SQL).await?;
    info!("Demo data seeded");
    Ok(true)
}
