use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::stock::errors::StockError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for StockError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match self.status_code() {
            Some(404) => StatusCode::NOT_FOUND,
            _ => StatusCode::SERVICE_UNAVAILABLE,
        };

        let (name, details) = match &self {
            StockError::UpstreamError { status: code, message } => (
                if status == StatusCode::NOT_FOUND {
                    "NotFound"
                } else {
                    "UpstreamError"
                },
                Some(format!("Status: {} - {}", code, message)),
            ),
            StockError::UpstreamUnavailable { message } => {
                ("ServiceUnavailable", Some(message.clone()))
            }
            StockError::InvalidResponse => ("InvalidResponse", None),
            StockError::TraversalLimitExceeded { max_pages } => (
                "TraversalLimitExceeded",
                Some(format!("Stopped after {} pages", max_pages)),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
                details,
            }),
        )
    }
}
