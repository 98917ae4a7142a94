use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use engine::{Category, CreateCategoryRequest, UpdateCategoryRequest};

use super::AppState;
use crate::{envelope::WebResponse, error::ApiError};

pub async fn find_all(State(state): State<AppState>) -> Result<WebResponse<Vec<Category>>, ApiError> {
    let categories = state.service.find_all().await?;
    Ok(WebResponse::ok(categories))
}

pub async fn find_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<WebResponse<Category>, ApiError> {
    let Path(id) = id?;
    let category = state.service.find_by_id(id).await?;
    Ok(WebResponse::ok(category))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<WebResponse<Category>, ApiError> {
    let Json(request) = payload?;
    let category = state.service.create(request).await?;
    Ok(WebResponse::ok(category))
}

/// The path id overrides any `id` in the body.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> Result<WebResponse<Category>, ApiError> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let category = state.service.update(id, request).await?;
    Ok(WebResponse::ok(category))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<WebResponse<()>, ApiError> {
    let Path(id) = id?;
    state.service.delete(id).await?;
    Ok(WebResponse::empty(StatusCode::OK))
}
