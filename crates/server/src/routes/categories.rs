use axum::{extract::State, http::StatusCode, response::Response, Json};
use models::category;
use service::resources::CategoryDto;

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::routes::crud;
use crate::state::ServerState;

pub const BASE: &str = "/api/Category";
const KIND: &str = "Category";

#[utoipa::path(
    get, path = "/api/Category/GetAllCategories", tag = "category",
    responses((status = 200, description = "All categories", body = [crate::openapi::CategoryDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<category::Model>>, ApiError> {
    crud::list(state.categories.as_ref(), KIND).await
}

#[utoipa::path(
    get, path = "/api/Category/{id}", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category", body = crate::openapi::CategoryDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<category::Model>, ApiError> {
    crud::get_one(state.categories.as_ref(), id).await
}

#[utoipa::path(
    post, path = "/api/Category", tag = "category",
    request_body = crate::openapi::CategoryDtoDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CategoryDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(dto): ApiJson<CategoryDto>) -> Result<Response, ApiError> {
    crud::create(state.categories.as_ref(), dto, BASE, KIND).await
}

#[utoipa::path(
    put, path = "/api/Category/{id}", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    request_body = crate::openapi::CategoryDtoDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(dto): ApiJson<CategoryDto>,
) -> Result<StatusCode, ApiError> {
    crud::replace(state.categories.as_ref(), id, dto).await
}

#[utoipa::path(
    delete, path = "/api/Category/{id}", tag = "category",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, ApiError> {
    crud::remove(state.categories.as_ref(), id).await
}
