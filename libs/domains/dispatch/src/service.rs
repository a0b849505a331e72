use std::sync::Arc;
use validator::Validate;

use crate::error::{DispatchError, DispatchResult};
use crate::models::{Courier, CourierWithTasks, CreateCourier, CreateTask, Task, TransferTask};
use crate::repository::{CourierRepository, TaskRepository};

fn validate<T: Validate>(input: &T) -> DispatchResult<()> {
    input
        .validate()
        .map_err(|e| DispatchError::Validation(e.to_string()))
}

/// Logs rule rejections at info and passes the result through
fn log_rejection<T>(result: DispatchResult<T>, operation: &str) -> DispatchResult<T> {
    if let Err(DispatchError::Rejected(rejection)) = &result {
        tracing::info!(operation, reason = %rejection, "Assignment rejected");
    }
    result
}

/// Service layer for Courier business logic
#[derive(Clone)]
pub struct CourierService<R: CourierRepository> {
    repository: Arc<R>,
}

impl<R: CourierRepository> CourierService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_courier(&self, input: CreateCourier) -> DispatchResult<Courier> {
        validate(&input)?;
        self.repository.create(input).await
    }

    pub async fn list_couriers(&self) -> DispatchResult<Vec<CourierWithTasks>> {
        self.repository.list_with_tasks().await
    }
}

/// Service layer for Task business logic
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_tasks(&self) -> DispatchResult<Vec<Task>> {
        self.repository.list().await
    }

    pub async fn get_task(&self, id: i32) -> DispatchResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(DispatchError::TaskNotFound(id))
    }

    pub async fn create_task(&self, input: CreateTask) -> DispatchResult<Task> {
        validate(&input)?;
        log_rejection(self.repository.assign(input).await, "assign")
    }

    pub async fn transfer_task(&self, id: i32, input: TransferTask) -> DispatchResult<Task> {
        validate(&input)?;
        log_rejection(
            self.repository.transfer(id, input.courier_id).await,
            "transfer",
        )
    }

    pub async fn delete_task(&self, id: i32) -> DispatchResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(DispatchError::TaskNotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockCourierRepository, MockTaskRepository};
    use crate::rules::AssignmentRejection;

    fn create_task(cells: i32) -> CreateTask {
        CreateTask {
            description: "Flowers".to_string(),
            cells,
            region_id: 1,
            address: "8 Garden Row".to_string(),
            courier_id: 1,
        }
    }

    #[tokio::test]
    async fn test_create_task_validates_before_store() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_assign().never();

        let service = TaskService::new(mock_repo);
        let result = service.create_task(create_task(0)).await;

        assert!(matches!(result, Err(DispatchError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_task_passes_rejection_through() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_assign().times(1).returning(|_| {
            Err(AssignmentRejection::RegionMismatch {
                task_region_id: 1,
                courier_region_id: 2,
            }
            .into())
        });

        let service = TaskService::new(mock_repo);
        let result = service.create_task(create_task(1)).await;

        assert!(matches!(
            result,
            Err(DispatchError::Rejected(AssignmentRejection::RegionMismatch { .. }))
        ));
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(5))
            .returning(|_| Ok(None));

        let service = TaskService::new(mock_repo);
        assert!(matches!(
            service.get_task(5).await,
            Err(DispatchError::TaskNotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_transfer_rejects_invalid_courier_id() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_transfer().never();

        let service = TaskService::new(mock_repo);
        let result = service
            .transfer_task(1, TransferTask { courier_id: 0 })
            .await;

        assert!(matches!(result, Err(DispatchError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_task() {
        let mut mock_repo = MockTaskRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = TaskService::new(mock_repo);
        assert!(matches!(
            service.delete_task(11).await,
            Err(DispatchError::TaskNotFound(11))
        ));
    }

    #[tokio::test]
    async fn test_create_courier_validates_before_store() {
        let mut mock_repo = MockCourierRepository::new();
        mock_repo.expect_create().never();

        let service = CourierService::new(mock_repo);
        let result = service
            .create_courier(CreateCourier {
                full_name: String::new(),
                region_id: 1,
                max_cells: 5,
            })
            .await;

        assert!(matches!(result, Err(DispatchError::Validation(_))));
    }
}
