use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::RegionResult;
use crate::models::{CreateRegion, Region};

/// Repository trait for Region persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn create(&self, input: CreateRegion) -> RegionResult<Region>;

    async fn get_by_id(&self, id: i32) -> RegionResult<Option<Region>>;

    /// All regions, ordered by name
    async fn list(&self) -> RegionResult<Vec<Region>>;
}

#[derive(Debug, Default)]
struct RegionState {
    regions: BTreeMap<i32, Region>,
    last_id: i32,
}

/// In-memory implementation of RegionRepository (for development/testing)
///
/// Ids are assigned sequentially from 1 and never reused, like a serial column.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegionRepository {
    state: Arc<RwLock<RegionState>>,
}

impl InMemoryRegionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RegionRepository for InMemoryRegionRepository {
    async fn create(&self, input: CreateRegion) -> RegionResult<Region> {
        let mut state = self.state.write().await;

        state.last_id += 1;
        let id = state.last_id;
        let region = Region::new(id, input);
        state.regions.insert(id, region.clone());

        tracing::info!(region_id = id, "Created region");
        Ok(region)
    }

    async fn get_by_id(&self, id: i32) -> RegionResult<Option<Region>> {
        let state = self.state.read().await;
        Ok(state.regions.get(&id).cloned())
    }

    async fn list(&self) -> RegionResult<Vec<Region>> {
        let state = self.state.read().await;

        let mut result: Vec<Region> = state.regions.values().cloned().collect();
        // Same order as `ORDER BY name, id`
        result.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str) -> CreateRegion {
        CreateRegion {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryRegionRepository::new();

        let first = repo.create(create("North")).await.unwrap();
        let second = repo.create(create("South")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_name() {
        let repo = InMemoryRegionRepository::new();
        repo.create(create("Riverside")).await.unwrap();
        repo.create(create("Central")).await.unwrap();
        repo.create(create("North")).await.unwrap();

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Central", "North", "Riverside"]);
    }

    #[tokio::test]
    async fn test_duplicate_names_are_allowed() {
        let repo = InMemoryRegionRepository::new();
        repo.create(create("Central")).await.unwrap();
        repo.create(create("Central")).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let repo = InMemoryRegionRepository::new();
        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }
}
