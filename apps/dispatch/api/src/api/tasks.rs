use axum::Router;
use domain_dispatch::{PgTaskRepository, TaskService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgTaskRepository::new(state.db.clone());
    let service = TaskService::new(repository);
    handlers::tasks::router(service)
}
