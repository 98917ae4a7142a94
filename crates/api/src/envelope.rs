//! The uniform `{code, status, data}` response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Wrapper returned for every outcome, success or failure.
///
/// `data` is left out of the JSON entirely when there is nothing to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> WebResponse<T> {
    pub fn new(status: StatusCode, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            status: status_label(status),
            data,
        }
    }

    /// `200 OK` carrying `data`.
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, Some(data))
    }
}

impl WebResponse<()> {
    /// An envelope with no `data`.
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status, None)
    }
}

/// Upper-cased canonical reason phrase, e.g. `NOT FOUND`.
pub fn status_label(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_follow_the_reason_phrase() {
        assert_eq!(status_label(StatusCode::OK), "OK");
        assert_eq!(status_label(StatusCode::NOT_FOUND), "NOT FOUND");
        assert_eq!(status_label(StatusCode::BAD_REQUEST), "BAD REQUEST");
        assert_eq!(status_label(StatusCode::UNAUTHORIZED), "UNAUTHORIZED");
        assert_eq!(
            status_label(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL SERVER ERROR"
        );
    }

    #[test]
    fn empty_envelope_omits_data() {
        let body = serde_json::to_value(WebResponse::empty(StatusCode::UNAUTHORIZED)).unwrap();
        assert_eq!(body, json!({ "code": 401, "status": "UNAUTHORIZED" }));
    }

    #[test]
    fn ok_envelope_carries_data() {
        let body = serde_json::to_value(WebResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(body, json!({ "code": 200, "status": "OK", "data": [1, 2] }));
    }

    #[test]
    fn response_status_matches_code() {
        let response = WebResponse::empty(StatusCode::NOT_FOUND).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
