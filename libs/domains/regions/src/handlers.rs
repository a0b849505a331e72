use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::RegionResult;
use crate::models::{CreateRegion, Region};
use crate::repository::RegionRepository;
use crate::service::RegionService;

pub const TAG: &str = "regions";

/// OpenAPI documentation for the Regions API
#[derive(OpenApi)]
#[openapi(
    paths(list_regions, create_region),
    components(
        schemas(Region, CreateRegion),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Delivery regions")
    )
)]
pub struct ApiDoc;

/// Router for `/regions`
pub fn router<R: RegionRepository + 'static>(service: RegionService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_regions).post(create_region))
        .with_state(shared_service)
}

/// List regions ordered by name
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of regions", body = Vec<Region>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_regions<R: RegionRepository>(
    State(service): State<Arc<RegionService<R>>>,
) -> RegionResult<Json<Vec<Region>>> {
    let regions = service.list_regions().await?;
    Ok(Json(regions))
}

/// Create a region
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateRegion,
    responses(
        (status = 201, description = "Region created", body = Region),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_region<R: RegionRepository>(
    State(service): State<Arc<RegionService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateRegion>,
) -> RegionResult<impl IntoResponse> {
    let region = service.create_region(input).await?;
    Ok((StatusCode::CREATED, Json(region)))
}
