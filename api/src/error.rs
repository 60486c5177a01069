//! Unified error types for the Accounts API
//!
//! This module defines error types for each layer:
//! - `StorageError`: raw persistence failures raised by repository adapters
//! - `DomainError`: use-case failures raised by the application services
//! - `AppError`: HTTP layer errors (wraps domain errors for responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::handlers::response::WebResponse;

/// Storage layer errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// A lookup matched no row
    #[error("no rows in result set")]
    NoRows,

    /// Connectivity, constraint violation or any other database failure
    #[error("database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for StorageError {
    fn from(e: sea_orm::DbErr) -> Self {
        StorageError::Database(e.to_string())
    }
}

/// Domain layer errors - what a use case can fail with
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed, missing required fields: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl DomainError {
    /// Remap a lookup's "no rows" outcome into a domain `NotFound` carrying
    /// `message`, leaving every other storage failure untouched.
    pub fn not_found_on_no_rows(e: StorageError, message: impl Into<String>) -> Self {
        match e {
            StorageError::NoRows => DomainError::NotFound(message.into()),
            other => DomainError::Storage(other),
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        DomainError::Validation { fields }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Path identifier that is not an integer
    #[error("Invalid ID format: {0}")]
    MalformedInput(String),

    /// Body that could not be decoded as the expected JSON shape
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Domain(DomainError::Validation { .. }) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, msg.clone())
            }
            AppError::Domain(DomainError::Storage(e)) => {
                tracing::error!(error = %e, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while accessing the database".to_string(),
                )
            }
            AppError::MalformedInput(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        let body: WebResponse<()> = WebResponse::error(status, message);
        (status, Json(body)).into_response()
    }
}
