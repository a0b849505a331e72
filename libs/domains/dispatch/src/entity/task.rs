use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the tasks table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub cells: i32,
    pub region_id: i32,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub courier_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courier::Entity",
        from = "Column::CourierId",
        to = "super::courier::Column::Id"
    )]
    Courier,
    #[sea_orm(
        belongs_to = "domain_regions::entity::Entity",
        from = "Column::RegionId",
        to = "domain_regions::entity::Column::Id"
    )]
    Region,
}

impl Related<super::courier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courier.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            cells: model.cells,
            region_id: model.region_id,
            address: model.address,
            courier_id: model.courier_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<crate::models::CreateTask> for ActiveModel {
    fn from(input: crate::models::CreateTask) -> Self {
        let now = chrono::Utc::now();
        ActiveModel {
            id: NotSet,
            description: Set(input.description),
            cells: Set(input.cells),
            region_id: Set(input.region_id),
            address: Set(input.address),
            courier_id: Set(input.courier_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
