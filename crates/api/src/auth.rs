//! API-key gate wrapped around every route.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{config::ApiConfig, envelope::WebResponse};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Let the request through only when `X-API-Key` matches the configured key;
/// otherwise answer `401 UNAUTHORIZED` without running any handler.
pub async fn require_api_key(
    State(config): State<Arc<ApiConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided == Some(config.api_key.as_str()) {
        return next.run(request).await;
    }

    warn!(
        method = %request.method(),
        uri = %request.uri(),
        key_present = provided.is_some(),
        "rejected request with missing or wrong API key"
    );
    WebResponse::empty(StatusCode::UNAUTHORIZED).into_response()
}
