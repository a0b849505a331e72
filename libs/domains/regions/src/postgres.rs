use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::RegionResult,
    models::{CreateRegion, Region},
    repository::RegionRepository,
};

#[derive(Clone)]
pub struct PgRegionRepository {
    db: DatabaseConnection,
}

impl PgRegionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn create(&self, input: CreateRegion) -> RegionResult<Region> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(region_id = model.id, "Created region");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> RegionResult<Option<Region>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> RegionResult<Vec<Region>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Name)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
