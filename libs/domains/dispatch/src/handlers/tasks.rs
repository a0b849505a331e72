use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestRuleViolationResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::DispatchResult;
use crate::models::{CreateTask, Task, TransferTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

pub const TAG: &str = "tasks";

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, get_task, create_task, transfer_task, delete_task),
    components(
        schemas(Task, CreateTask, TransferTask),
        responses(
            BadRequestValidationResponse,
            BadRequestRuleViolationResponse,
            BadRequestIdResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Delivery tasks, assignment and transfer")
    )
)]
pub struct ApiDoc;

/// Router for `/tasks`
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route(
            "/{id}",
            get(get_task).patch(transfer_task).delete(delete_task),
        )
        .with_state(shared_service)
}

/// List all tasks
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> DispatchResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Get a task by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
) -> DispatchResult<Json<Task>> {
    let task = service.get_task(id).await?;
    Ok(Json(task))
}

/// Create a task and assign it to a courier
///
/// Rejected with 400 `RULE_VIOLATION` when the courier is in another region
/// or lacks free cells.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, response = BadRequestRuleViolationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> DispatchResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Transfer a task to another courier
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Task id")
    ),
    request_body = TransferTask,
    responses(
        (status = 200, description = "Task transferred", body = Task),
        (status = 400, response = BadRequestRuleViolationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn transfer_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<TransferTask>,
) -> DispatchResult<Json<Task>> {
    let task = service.transfer_task(id, input).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Task id")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    IdPath(id): IdPath,
) -> DispatchResult<StatusCode> {
    service.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
