use std::sync::Arc;
use validator::Validate;

use crate::error::{RegionError, RegionResult};
use crate::models::{CreateRegion, Region};
use crate::repository::RegionRepository;

/// Service layer for Region business logic
#[derive(Clone)]
pub struct RegionService<R: RegionRepository> {
    repository: Arc<R>,
}

impl<R: RegionRepository> RegionService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_region(&self, input: CreateRegion) -> RegionResult<Region> {
        input
            .validate()
            .map_err(|e| RegionError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    pub async fn list_regions(&self) -> RegionResult<Vec<Region>> {
        self.repository.list().await
    }
}
