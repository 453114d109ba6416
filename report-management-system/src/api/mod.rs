pub mod admin;
pub mod dtos;
pub mod notifications;
pub mod photos;
pub mod reports;
pub mod schedules;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use domain_report::exception::ReportException;
use domain_schedule::exception::ScheduleException;
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Report(#[from] ReportException),

    #[error("{0}")]
    Schedule(#[from] ScheduleException),

    #[error("{message}")]
    BadRequest { message: String },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Report(
                ReportException::NotFound { .. } | ReportException::PhotoNotFound { .. },
            ) => StatusCode::NOT_FOUND,
            ApiError::Report(ReportException::InvalidForm { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Schedule(ScheduleException::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Schedule(ScheduleException::InvalidForm { .. }) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
