use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::DispatchResult;
use crate::models::{Courier, CourierWithTasks, CreateCourier, Task};
use crate::repository::CourierRepository;
use crate::service::CourierService;

pub const TAG: &str = "couriers";

/// OpenAPI documentation for the Couriers API
#[derive(OpenApi)]
#[openapi(
    paths(list_couriers, create_courier),
    components(
        schemas(Courier, CourierWithTasks, CreateCourier, Task),
        responses(BadRequestValidationResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Couriers and their current load")
    )
)]
pub struct ApiDoc;

/// Router for `/couriers`
pub fn router<R: CourierRepository + 'static>(service: CourierService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_couriers).post(create_courier))
        .with_state(shared_service)
}

/// List couriers with their region name, used cells and tasks
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of couriers", body = Vec<CourierWithTasks>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_couriers<R: CourierRepository>(
    State(service): State<Arc<CourierService<R>>>,
) -> DispatchResult<Json<Vec<CourierWithTasks>>> {
    let couriers = service.list_couriers().await?;
    Ok(Json(couriers))
}

/// Create a courier in an existing region
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateCourier,
    responses(
        (status = 201, description = "Courier created", body = Courier),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_courier<R: CourierRepository>(
    State(service): State<Arc<CourierService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCourier>,
) -> DispatchResult<impl IntoResponse> {
    let courier = service.create_courier(input).await?;
    Ok((StatusCode::CREATED, Json(courier)))
}
