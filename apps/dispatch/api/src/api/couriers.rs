use axum::Router;
use domain_dispatch::{CourierService, PgCourierRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgCourierRepository::new(state.db.clone());
    let service = CourierService::new(repository);
    handlers::couriers::router(service)
}
