use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::RegistryError;
use thiserror::Error;
use tracing::{debug, error};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("internal server error")]
    Internal,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Registry(RegistryError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            AppError::Registry(RegistryError::CodeConflict(_)) => StatusCode::CONFLICT,
            AppError::Registry(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Registry(RegistryError::Expired(_)) => StatusCode::GONE,
            AppError::Registry(RegistryError::ExhaustedCapacity { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Registry(RegistryError::InvalidInput(message)) => message.clone(),
            AppError::Registry(RegistryError::CodeConflict(_)) => {
                "Shortcode already exists".to_string()
            }
            AppError::Registry(RegistryError::NotFound(_)) => "Shortcode not found".to_string(),
            AppError::Registry(RegistryError::Expired(_)) => "Short link expired".to_string(),
            AppError::Registry(RegistryError::ExhaustedCapacity { .. }) => {
                "Could not allocate a shortcode, try again".to_string()
            }
            AppError::MalformedBody(message) => message.clone(),
            AppError::Internal => "Internal Server Error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = ErrorResponse {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}
