use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::AppError;

use super::dto::ErrorResponse;

/// Wire-level messages kept byte-for-byte compatible with the service
/// this API replaces.
fn wire_message(error: &AppError) -> String {
    match error {
        AppError::AccountNotFound(_) => "Customer not found!".to_string(),
        AppError::AccountAlreadyExists(_) => "Customer already exists!".to_string(),
        AppError::InsufficientFunds { .. } => {
            "Do not have enough funds to withdraw".to_string()
        }
        AppError::InvalidInput(message) => message.clone(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!("request rejected: {self}");
        let body = ErrorResponse {
            error: wire_message(&self),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
