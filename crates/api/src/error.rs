//! Failure classifier — the single place a failure becomes an HTTP response.
//!
//! Priority order:
//! 1. `ServiceError::NotFound`       → 404 NOT FOUND
//! 2. `ServiceError::Validation`     → 400 BAD REQUEST
//!    (malformed bodies and path ids land here too)
//! 3. anything else                  → 500 INTERNAL SERVER ERROR
//!
//! The failure's `Display` text becomes the envelope's `data`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use engine::ServiceError;
use thiserror::Error;
use tracing::{debug, error};

use crate::envelope::WebResponse;

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The body or path could not be decoded into the expected shape.
    #[error("{0}")]
    MalformedRequest(String),
}

impl ApiError {
    /// The status code this failure is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::Validation(_)) | Self::MalformedRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Service(ServiceError::Infrastructure(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let diagnostic = self.to_string();

        if status.is_server_error() {
            error!(error = %diagnostic, "request failed");
        } else {
            debug!(%status, error = %diagnostic, "request rejected");
        }

        WebResponse::new(status, Some(diagnostic)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{CreateCategoryRequest, RuleValidator, ValidationGate};
    use serde_json::Value;

    fn validation_error() -> ServiceError {
        RuleValidator
            .validate(&CreateCategoryRequest::default())
            .unwrap_err()
            .into()
    }

    async fn body_of(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_renders_404_with_message() {
        let response = ApiError::from(ServiceError::NotFound("category is not found".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body["code"], 404);
        assert_eq!(body["status"], "NOT FOUND");
        assert_eq!(body["data"], "category is not found");
    }

    #[tokio::test]
    async fn validation_renders_400_with_diagnostics() {
        let response = ApiError::from(validation_error()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body["status"], "BAD REQUEST");
        assert!(body["data"].as_str().unwrap().contains("'CreateCategoryRequest.name'"));
    }

    #[tokio::test]
    async fn infrastructure_renders_500() {
        let failure = ServiceError::Infrastructure(db::DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = ApiError::from(failure).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert_eq!(body["code"], 500);
        assert_eq!(body["status"], "INTERNAL SERVER ERROR");
        assert!(body["data"].as_str().unwrap().starts_with("database error:"));
    }

    #[test]
    fn malformed_requests_are_bad_requests() {
        assert_eq!(
            ApiError::MalformedRequest("bad json".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
