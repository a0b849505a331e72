use axum::Router;
use domain_regions::{PgRegionRepository, RegionService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgRegionRepository::new(state.db.clone());
    let service = RegionService::new(repository);
    handlers::router(service)
}
