use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Delivery region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Region {
    pub id: i32,
    /// Display name; not required to be unique
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRegion {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

impl Region {
    pub fn new(id: i32, input: CreateRegion) -> Self {
        Self {
            id,
            name: input.name,
            created_at: Utc::now(),
        }
    }
}
