pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_regions;
mod m20261019_000002_create_couriers;
mod m20261019_000003_create_tasks;
pub mod seed;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_regions::Migration),
            Box::new(m20261019_000002_create_couriers::Migration),
            Box::new(m20261019_000003_create_tasks::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered() {
        let names: Vec<String> = Migrator::migrations().iter().map(|m| m.name().to_string()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), 3);
    }
}
