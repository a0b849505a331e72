use async_trait::async_trait;
use domain_regions::{InMemoryRegionRepository, RegionRepository};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{DispatchError, DispatchResult};
use crate::models::{Courier, CourierWithTasks, CreateCourier, CreateTask, Task};
use crate::rules::{Candidate, validate_assignment};

/// Repository trait for Courier persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourierRepository: Send + Sync {
    /// Fails with `RegionNotFound` when `input.region_id` does not exist
    async fn create(&self, input: CreateCourier) -> DispatchResult<Courier>;

    /// All couriers ordered by id, each with its region name and tasks
    async fn list_with_tasks(&self) -> DispatchResult<Vec<CourierWithTasks>>;
}

/// Repository trait for Task persistence
///
/// `assign` and `transfer` check the assignment rules and write in one
/// atomic step; a rejected call leaves the store unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks ordered by id
    async fn list(&self) -> DispatchResult<Vec<Task>>;

    async fn get_by_id(&self, id: i32) -> DispatchResult<Option<Task>>;

    /// Creates a task on `input.courier_id`
    async fn assign(&self, input: CreateTask) -> DispatchResult<Task>;

    /// Moves task `task_id` to courier `courier_id`
    async fn transfer(&self, task_id: i32, courier_id: i32) -> DispatchResult<Task>;

    /// Returns `false` when no task had that id
    async fn delete(&self, id: i32) -> DispatchResult<bool>;
}

/// `last_*_id` only grow, so deleted ids are never handed out again
#[derive(Debug, Default)]
struct DispatchState {
    couriers: BTreeMap<i32, Courier>,
    tasks: BTreeMap<i32, Task>,
    last_courier_id: i32,
    last_task_id: i32,
}

impl DispatchState {
    fn tasks_of(&self, courier_id: i32) -> Vec<Task> {
        self.tasks
            .values()
            .filter(|t| t.courier_id == courier_id)
            .cloned()
            .collect()
    }
}

/// In-memory implementation of CourierRepository and TaskRepository (for development/testing)
///
/// Couriers and tasks share one lock, held for writing across the rule check
/// and the write itself. Regions come from the wrapped region repository.
#[derive(Clone, Default)]
pub struct InMemoryDispatchRepository {
    regions: InMemoryRegionRepository,
    state: Arc<RwLock<DispatchState>>,
}

impl InMemoryDispatchRepository {
    pub fn new(regions: InMemoryRegionRepository) -> Self {
        Self {
            regions,
            state: Arc::default(),
        }
    }
}

#[async_trait]
impl CourierRepository for InMemoryDispatchRepository {
    async fn create(&self, input: CreateCourier) -> DispatchResult<Courier> {
        if self.regions.get_by_id(input.region_id).await?.is_none() {
            return Err(DispatchError::RegionNotFound(input.region_id));
        }

        let mut state = self.state.write().await;

        state.last_courier_id += 1;
        let id = state.last_courier_id;
        let courier = Courier::new(id, input);
        state.couriers.insert(id, courier.clone());

        tracing::info!(courier_id = id, region_id = courier.region_id, "Created courier");
        Ok(courier)
    }

    async fn list_with_tasks(&self) -> DispatchResult<Vec<CourierWithTasks>> {
        let region_names: HashMap<i32, String> = self
            .regions
            .list()
            .await?
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect();

        let state = self.state.read().await;

        let result = state
            .couriers
            .values()
            .map(|courier| {
                CourierWithTasks::new(
                    courier.clone(),
                    region_names.get(&courier.region_id).cloned(),
                    state.tasks_of(courier.id),
                )
            })
            .collect();

        Ok(result)
    }
}

#[async_trait]
impl TaskRepository for InMemoryDispatchRepository {
    async fn list(&self) -> DispatchResult<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> DispatchResult<Option<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn assign(&self, input: CreateTask) -> DispatchResult<Task> {
        let mut state = self.state.write().await;

        let courier = state
            .couriers
            .get(&input.courier_id)
            .ok_or(DispatchError::CourierNotFound(input.courier_id))?;
        validate_assignment(courier, &state.tasks_of(courier.id), &Candidate::from(&input))?;

        state.last_task_id += 1;
        let id = state.last_task_id;
        let task = Task::new(id, input);
        state.tasks.insert(id, task.clone());

        tracing::info!(task_id = id, courier_id = task.courier_id, "Assigned task");
        Ok(task)
    }

    async fn transfer(&self, task_id: i32, courier_id: i32) -> DispatchResult<Task> {
        let mut state = self.state.write().await;

        let task = state
            .tasks
            .get(&task_id)
            .cloned()
            .ok_or(DispatchError::TaskNotFound(task_id))?;
        let courier = state
            .couriers
            .get(&courier_id)
            .ok_or(DispatchError::CourierNotFound(courier_id))?;
        validate_assignment(courier, &state.tasks_of(courier_id), &Candidate::from(&task))?;

        let from_courier_id = task.courier_id;
        let updated = match state.tasks.get_mut(&task_id) {
            Some(stored) => {
                stored.reassign(courier_id);
                stored.clone()
            }
            None => return Err(DispatchError::TaskNotFound(task_id)),
        };

        tracing::info!(task_id, from_courier_id, courier_id, "Transferred task");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> DispatchResult<bool> {
        let mut state = self.state.write().await;
        let removed = state.tasks.remove(&id).is_some();

        if removed {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(removed)
    }
}
