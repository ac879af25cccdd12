use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Message returned for every rejected submission. Which field failed is
/// never disclosed.
pub const INVALID_DATA: &str = "Invalid data";

#[derive(Debug)]
pub enum AppError {
    InvalidData,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidData => write!(f, "{INVALID_DATA}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidData => StatusCode::BAD_REQUEST,
        };
        let body = serde_json::json!({ "success": false, "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
