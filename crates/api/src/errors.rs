use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use keyscope_domain::DomainError;
use serde_json::json;
use tracing::error;

/// Every failure leaves the API as `{ "ok": false, "error": ... }`.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(DomainError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::StoreUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, self.0.to_string())
            }

            DomainError::StoreCommand(_) => (StatusCode::BAD_GATEWAY, self.0.to_string()),

            DomainError::ConfigError(_) => {
                error!(error = %self.0, "Unexpected configuration error in request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "ok": false, "error": message }))).into_response()
    }
}
