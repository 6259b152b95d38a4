// HTTP error responses: a status code plus a plain-text message

use crate::error::BankError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn customer_not_found(id: u64) -> Self {
        Self::not_found(format!("Customer with ID {} not found", id))
    }
}

/// Domain failures on account endpoints are all 400s
impl From<BankError> for ApiError {
    fn from(err: BankError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

/// Malformed or mistyped bodies are 400s; a missing JSON content type keeps its 415
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match &rejection {
            JsonRejection::MissingJsonContentType(_) => rejection.status(),
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError::new(status, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_error_maps_to_bad_request() {
        let api: ApiError = BankError::account_not_found("x").into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.message, "Account with number x not found");
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ApiError::customer_not_found(3).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
