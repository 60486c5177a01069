//! Response envelope shared by every endpoint

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// `{ code, status, message?, data? }`
#[derive(Debug, Serialize, Deserialize)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> WebResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            status: status_text(StatusCode::OK).to_string(),
            message: None,
            data: Some(data),
        }
    }

    /// Success without a payload, carrying a human-readable message
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            status: status_text(StatusCode::OK).to_string(),
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            status: status_text(status).to_string(),
            message: Some(message.into()),
            data: None,
        }
    }
}

fn status_text(status: StatusCode) -> &'static str {
    match status {
        StatusCode::OK => "OK",
        StatusCode::BAD_REQUEST => "BAD_REQUEST",
        StatusCode::NOT_FOUND => "NOT_FOUND",
        _ => "INTERNAL_SERVER_ERROR",
    }
}
