use axum::Router;

pub mod couriers;
pub mod health;
pub mod regions;
pub mod tasks;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/regions", regions::router(state))
        .nest("/couriers", couriers::router(state))
        .nest("/tasks", tasks::router(state))
}

/// Router with the `/ready` endpoint, which pings the database.
///
/// Merged next to the stateless app router so it stays outside `/api`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
