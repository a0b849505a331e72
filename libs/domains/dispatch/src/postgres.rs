use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};
use std::collections::HashMap;

use crate::{
    entity::{courier, task},
    error::{DispatchError, DispatchResult},
    models::{Courier, CourierWithTasks, CreateCourier, CreateTask, Task},
    repository::{CourierRepository, TaskRepository},
    rules::{Candidate, validate_assignment},
};

#[derive(Clone)]
pub struct PgCourierRepository {
    db: DatabaseConnection,
}

impl PgCourierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourierRepository for PgCourierRepository {
    async fn create(&self, input: CreateCourier) -> DispatchResult<Courier> {
        let region_id = input.region_id;
        let active_model: courier::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await.map_err(|err| {
            match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    DispatchError::RegionNotFound(region_id)
                }
                _ => err.into(),
            }
        })?;

        tracing::info!(courier_id = model.id, region_id, "Created courier");
        Ok(model.into())
    }

    async fn list_with_tasks(&self) -> DispatchResult<Vec<CourierWithTasks>> {
        let rows = courier::Entity::find()
            .find_also_related(domain_regions::entity::Entity)
            .order_by_asc(courier::Column::Id)
            .all(&self.db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let courier_ids: Vec<i32> = rows.iter().map(|(c, _)| c.id).collect();
        let mut tasks_by_courier: HashMap<i32, Vec<Task>> = HashMap::new();
        for model in task::Entity::find()
            .filter(task::Column::CourierId.is_in(courier_ids))
            .order_by_asc(task::Column::Id)
            .all(&self.db)
            .await?
        {
            tasks_by_courier
                .entry(model.courier_id)
                .or_default()
                .push(model.into());
        }

        let result = rows
            .into_iter()
            .map(|(courier, region)| {
                let tasks = tasks_by_courier.remove(&courier.id).unwrap_or_default();
                CourierWithTasks::new(courier.into(), region.map(|r| r.name), tasks)
            })
            .collect();

        Ok(result)
    }
}

#[derive(Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Locks the courier row for the rest of the transaction and loads its tasks
async fn lock_courier<C: ConnectionTrait>(
    conn: &C,
    courier_id: i32,
) -> DispatchResult<(Courier, Vec<Task>)> {
    let courier: Courier = courier::Entity::find_by_id(courier_id)
        .lock_exclusive()
        .one(conn)
        .await?
        .ok_or(DispatchError::CourierNotFound(courier_id))?
        .into();

    let tasks = task::Entity::find()
        .filter(task::Column::CourierId.eq(courier_id))
        .order_by_asc(task::Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok((courier, tasks))
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list(&self) -> DispatchResult<Vec<Task>> {
        let models = task::Entity::find()
            .order_by_asc(task::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> DispatchResult<Option<Task>> {
        let model = task::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn assign(&self, input: CreateTask) -> DispatchResult<Task> {
        // Dropping `txn` without commit rolls back
        let txn = self.db.begin().await?;

        let (courier, current_tasks) = lock_courier(&txn, input.courier_id).await?;
        validate_assignment(&courier, &current_tasks, &Candidate::from(&input))?;

        let active_model: task::ActiveModel = input.into();
        let model = active_model.insert(&txn).await?;
        txn.commit().await?;

        tracing::info!(task_id = model.id, courier_id = model.courier_id, "Assigned task");
        Ok(model.into())
    }

    async fn transfer(&self, task_id: i32, courier_id: i32) -> DispatchResult<Task> {
        let txn = self.db.begin().await?;

        // Lock order: task row, then courier row
        let existing = task::Entity::find_by_id(task_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(DispatchError::TaskNotFound(task_id))?;
        let candidate = Candidate {
            id: Some(existing.id),
            region_id: existing.region_id,
            cells: existing.cells,
        };
        let from_courier_id = existing.courier_id;

        let (courier, current_tasks) = lock_courier(&txn, courier_id).await?;
        validate_assignment(&courier, &current_tasks, &candidate)?;

        let mut active_model: task::ActiveModel = existing.into();
        active_model.courier_id = Set(courier_id);
        active_model.updated_at = Set(chrono::Utc::now().into());
        let model = active_model.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(task_id, from_courier_id, courier_id, "Transferred task");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> DispatchResult<bool> {
        let result = task::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(result.rows_affected > 0)
    }
}
