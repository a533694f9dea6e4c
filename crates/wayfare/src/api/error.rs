//! API error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use wayfare_core::{CoreError, FieldError};
use wayfare_store::StoreError;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Error code
    #[schema(example = "NOT_FOUND")]
    pub code: String,
    /// Error message
    pub message: String,
    /// Per-field validation failures, present on `VALIDATION` errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldErrorBody>>,
}

/// A single field validation failure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorBody {
    #[schema(example = "title")]
    pub field: String,
    #[schema(example = "must not be empty")]
    pub message: String,
}

impl ApiError {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            fields: None,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    /// Create a validation error carrying per-field failures
    pub fn validation(fields: Vec<FieldError>) -> Self {
        Self {
            code: "VALIDATION".to_string(),
            message: "validation failed".to_string(),
            fields: Some(
                fields
                    .into_iter()
                    .map(|f| FieldErrorBody {
                        field: f.field,
                        message: f.message,
                    })
                    .collect(),
            ),
        }
    }
}

/// Wrapper for API errors with status codes
pub struct AppError {
    pub status: StatusCode,
    pub error: ApiError,
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::internal(message),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: ApiError::not_found(message),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: ApiError::unauthorized(message),
        }
    }

    pub fn validation(fields: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation(fields),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::not_found(format!("listing not found: {id}")),
            StoreError::Database(e) => {
                tracing::error!(error = %e, "database error");
                Self::internal("database error")
            }
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(fields) => Self::validation(fields),
            CoreError::UnknownStatus(status) => Self::validation(vec![FieldError::new(
                "status",
                format!("unknown listing status: {status}"),
            )]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_fields() {
        let err = AppError::from(CoreError::Validation(vec![FieldError::new(
            "title",
            "must not be empty",
        )]));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.code, "VALIDATION");
        let fields = err.error.fields.unwrap();
        assert_eq!(fields[0].field, "title");
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let err = AppError::from(StoreError::NotFound(9));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.code, "NOT_FOUND");
    }

    #[test]
    fn plain_errors_omit_fields_in_json() {
        let body = serde_json::to_value(ApiError::unauthorized("nope")).unwrap();
        assert!(body.get("fields").is_none());
        assert_eq!(body["code"], "UNAUTHORIZED");
    }
}
