use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the couriers table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "couriers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub region_id: i32,
    pub max_cells: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "domain_regions::entity::Entity",
        from = "Column::RegionId",
        to = "domain_regions::entity::Column::Id"
    )]
    Region,
    #[sea_orm(has_many = "super::task::Entity")]
    Tasks,
}

impl Related<domain_regions::entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Courier {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            region_id: model.region_id,
            max_cells: model.max_cells,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<crate::models::CreateCourier> for ActiveModel {
    fn from(input: crate::models::CreateCourier) -> Self {
        let now = chrono::Utc::now();
        ActiveModel {
            id: NotSet,
            full_name: Set(input.full_name),
            region_id: Set(input.region_id),
            max_cells: Set(input.max_cells),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
