//! Request handlers.

pub mod categories;

use axum::http::{StatusCode, Uri};
use engine::CategoryService;

use crate::envelope::WebResponse;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: CategoryService,
}

/// Fallback for paths no route matches.
pub async fn no_route(uri: Uri) -> WebResponse<String> {
    WebResponse::new(StatusCode::NOT_FOUND, Some(format!("no route for {uri}")))
}

/// Fallback for a known path reached with a method it does not serve.
pub async fn method_not_allowed() -> WebResponse<()> {
    WebResponse::empty(StatusCode::METHOD_NOT_ALLOWED)
}
