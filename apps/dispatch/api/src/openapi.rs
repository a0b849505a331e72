use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Dispatch API",
        version = "0.1.0",
        description = "Regions, couriers and delivery tasks with capacity and region assignment rules"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/regions", api = domain_regions::handlers::ApiDoc),
        (path = "/couriers", api = domain_dispatch::handlers::couriers::ApiDoc),
        (path = "/tasks", api = domain_dispatch::handlers::tasks::ApiDoc)
    )
)]
pub struct ApiDoc;
