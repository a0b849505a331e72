use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_regions::RegionError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::rules::AssignmentRejection;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Courier not found: {0}")]
    CourierNotFound(i32),

    #[error("Task not found: {0}")]
    TaskNotFound(i32),

    #[error("Region not found: {0}")]
    RegionNotFound(i32),

    #[error(transparent)]
    Rejected(#[from] AssignmentRejection),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

impl From<DbErr> for DispatchError {
    fn from(err: DbErr) -> Self {
        DispatchError::Internal(format!("Database error: {}", err))
    }
}

impl From<RegionError> for DispatchError {
    fn from(err: RegionError) -> Self {
        match err {
            RegionError::NotFound(id) => DispatchError::RegionNotFound(id),
            RegionError::Validation(msg) => DispatchError::Validation(msg),
            RegionError::Internal(msg) => DispatchError::Internal(msg),
        }
    }
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::CourierNotFound(id) => {
                AppError::NotFound(format!("Courier {} not found", id))
            }
            DispatchError::TaskNotFound(id) => AppError::NotFound(format!("Task {} not found", id)),
            DispatchError::RegionNotFound(id) => {
                AppError::NotFound(format!("Region {} not found", id))
            }
            DispatchError::Rejected(rejection) => AppError::RuleViolation {
                message: rejection.to_string(),
                details: Some(rejection.details()),
            },
            DispatchError::Validation(msg) => AppError::BadRequest(msg),
            DispatchError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
