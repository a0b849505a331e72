use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Courier working a single region with a fixed carrying capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Courier {
    pub id: i32,
    pub full_name: String,
    pub region_id: i32,
    /// Upper bound on the summed `cells` of the courier's tasks
    pub max_cells: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Courier listing entry: the courier plus its region name and tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourierWithTasks {
    #[serde(flatten)]
    pub courier: Courier,
    /// `None` only if the region row is missing
    pub region_name: Option<String>,
    /// Sum of `cells` over `tasks`
    pub used_cells: i64,
    /// Ordered by id
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourier {
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
    #[validate(range(min = 1))]
    pub region_id: i32,
    #[validate(range(min = 1))]
    pub max_cells: i32,
}

/// Delivery task, always assigned to exactly one courier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: i32,
    pub description: String,
    /// Capacity units the task occupies
    pub cells: i32,
    pub region_id: i32,
    pub address: String,
    pub courier_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1))]
    pub cells: i32,
    #[validate(range(min = 1))]
    pub region_id: i32,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(range(min = 1))]
    pub courier_id: i32,
}

/// Body of `PATCH /tasks/{id}`: move the task to another courier
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TransferTask {
    #[validate(range(min = 1))]
    pub courier_id: i32,
}

impl Courier {
    pub fn new(id: i32, input: CreateCourier) -> Self {
        let now = Utc::now();
        Self {
            id,
            full_name: input.full_name,
            region_id: input.region_id,
            max_cells: input.max_cells,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Task {
    pub fn new(id: i32, input: CreateTask) -> Self {
        let now = Utc::now();
        Self {
            id,
            description: input.description,
            cells: input.cells,
            region_id: input.region_id,
            address: input.address,
            courier_id: input.courier_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reassigns the task, bumping `updated_at`
    pub fn reassign(&mut self, courier_id: i32) {
        self.courier_id = courier_id;
        self.updated_at = Utc::now();
    }
}

impl CourierWithTasks {
    pub fn new(courier: Courier, region_name: Option<String>, tasks: Vec<Task>) -> Self {
        Self {
            used_cells: crate::rules::used_cells(&tasks),
            courier,
            region_name,
            tasks,
        }
    }
}
