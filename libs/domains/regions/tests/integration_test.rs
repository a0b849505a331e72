//! Integration tests for the Regions domain
//!
//! Run against real PostgreSQL via testcontainers:
//! `cargo test -p domain_regions -- --ignored`

use domain_regions::*;
use test_utils::{TestDataBuilder, TestDatabase};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_list_regions() {
    let db = TestDatabase::new().await;
    let repo = PgRegionRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_list_regions");

    let zulu = repo
        .create(CreateRegion {
            name: builder.name("region", "zulu"),
        })
        .await
        .unwrap();
    let alpha = repo
        .create(CreateRegion {
            name: builder.name("region", "alpha"),
        })
        .await
        .unwrap();

    assert!(zulu.id > 0);
    assert_ne!(zulu.id, alpha.id);

    let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|r| r.name).collect();
    let alpha_pos = names.iter().position(|n| *n == alpha.name).unwrap();
    let zulu_pos = names.iter().position(|n| *n == zulu.name).unwrap();
    assert!(alpha_pos < zulu_pos, "regions should be ordered by name");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_get_region_by_id() {
    let db = TestDatabase::new().await;
    let repo = PgRegionRepository::new(db.connection());

    let created = repo
        .create(CreateRegion {
            name: "Central".to_string(),
        })
        .await
        .unwrap();

    let found = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Central");
    assert!(repo.get_by_id(created.id + 1000).await.unwrap().is_none());
}
