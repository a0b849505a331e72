use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegionError {
    #[error("Region not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type RegionResult<T> = Result<T, RegionError>;

impl From<DbErr> for RegionError {
    fn from(err: DbErr) -> Self {
        RegionError::Internal(format!("Database error: {}", err))
    }
}

impl From<RegionError> for AppError {
    fn from(err: RegionError) -> Self {
        match err {
            RegionError::NotFound(id) => AppError::NotFound(format!("Region {} not found", id)),
            RegionError::Validation(msg) => AppError::BadRequest(msg),
            RegionError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for RegionError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
