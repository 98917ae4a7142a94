//! `api` crate — HTTP REST API layer.
//!
//! Exposes (every route requires the `X-API-Key` header):
//!   GET    /api/categories
//!   GET    /api/categories/{id}
//!   POST   /api/categories
//!   PUT    /api/categories/{id}
//!   DELETE /api/categories/{id}
//!
//! Handlers, the auth gate and the fallback all answer with a
//! [`WebResponse`] envelope.

pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use db::DbPool;
use engine::CategoryService;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ApiConfig;
pub use envelope::WebResponse;
pub use error::ApiError;
pub use handlers::AppState;

use handlers::categories;

/// Build the application router around `service`.
pub fn router(service: CategoryService, config: ApiConfig) -> Router {
    let state = AppState { service };

    Router::new()
        .route(
            "/api/categories",
            get(categories::find_all)
                .post(categories::create)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/categories/:id",
            get(categories::find_by_id)
                .put(categories::update)
                .delete(categories::delete)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::no_route)
        .layer(middleware::from_fn_with_state(
            Arc::new(config),
            auth::require_api_key,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `bind` and serve the API until `shutdown` resolves.
pub async fn serve<F>(bind: &str, pool: DbPool, config: ApiConfig, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(CategoryService::new(pool), config);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
