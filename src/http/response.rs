use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::service::ServiceError;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self {
            ServiceError::NotFound(_) => status.into_response(),
            ServiceError::Validation(errors) => (status, Json(errors)).into_response(),
            ServiceError::Repository(err) => {
                tracing::error!(error = %err, "video repository failure");
                let body = json!({ "error": err.to_string() });
                (status, Json(body)).into_response()
            }
        }
    }
}
