use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::activities::application::errors::ApplicationError;

pub const INTERNAL_SERVER_ERROR_DETAIL: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn query_rejection_response(rejection: QueryRejection) -> Response {
    error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::ActivityNotFound => StatusCode::NOT_FOUND,
            ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
            // Backend details stay in the logs.
            ApplicationError::Store(_) => {
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_DETAIL,
                );
            }
        };
        error_response(status, self.to_string())
    }
}
