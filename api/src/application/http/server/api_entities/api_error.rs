use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use sinu_core::domain::common::entities::app_errors::CoreError;
use thiserror::Error;
use utoipa::ToSchema;

pub const NO_FILE_UPLOADED: &str = "No file uploaded";
pub const NO_INGREDIENTS_READ: &str = "Could not read ingredients";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    GatewayTimeout(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Error body shared by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NoIngredientsExtracted => {
                ApiError::BadRequest(NO_INGREDIENTS_READ.to_string())
            }
            CoreError::Invalid => ApiError::BadRequest(NO_FILE_UPLOADED.to_string()),
            CoreError::ExternalServiceTimeout => {
                ApiError::GatewayTimeout("Ingredient analysis timed out".to_string())
            }
            CoreError::ExternalServiceError(_) => {
                ApiError::BadGateway("Ingredient analysis service unavailable".to_string())
            }
            CoreError::IngredientDatabase(message) => ApiError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        }

        (
            status,
            Json(ApiErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        assert_eq!(
            ApiError::from(CoreError::NoIngredientsExtracted),
            ApiError::BadRequest("Could not read ingredients".to_string())
        );
        assert_eq!(
            ApiError::from(CoreError::ExternalServiceTimeout).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ApiError::from(CoreError::ExternalServiceError("boom".to_string())).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
