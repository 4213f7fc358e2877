// src/error.rs
use axum::{
    response::{Html, IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::data::DataError;
use crate::views::pages;

/// Request-level failure. Rendered as an HTML error page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Data(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Data(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self, status: StatusCode) {
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(%status, error = %self, "Request rejected");
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        self.log(status);
        (status, Html(pages::error(status, &self.to_string()))).into_response()
    }
}

/// Same failures as [`AppError`], rendered as JSON for the API routes.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        ApiError(AppError::Data(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        self.0.log(status);
        let body = Json(json!({
            "error": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::from(DataError::NotFound { path: PathBuf::from("products.csv") });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_data_errors_map_to_500() {
        let err = AppError::from(DataError::InvalidRow {
            path: PathBuf::from("products.csv"),
            line: 2,
            reason: "price cannot be negative".into(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::internal("boom").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_maps_to_400() {
        assert_eq!(AppError::validation("bad n").status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_keeps_status() {
        let response = AppError::from(DataError::NotFound { path: PathBuf::from("orders.csv") })
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
