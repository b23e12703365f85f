use axum::{extract::State, http::StatusCode, response::Response, Json};
use models::product;
use service::resources::ProductDto;

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::routes::crud;
use crate::state::ServerState;

pub const BASE: &str = "/api/Product";
const KIND: &str = "Product";

#[utoipa::path(
    get, path = "/api/Product/GetAllProducts", tag = "product",
    responses((status = 200, description = "All products", body = [crate::openapi::ProductDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<product::Model>>, ApiError> {
    crud::list(state.products.as_ref(), KIND).await
}

#[utoipa::path(
    get, path = "/api/Product/{id}", tag = "product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = crate::openapi::ProductDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<product::Model>, ApiError> {
    crud::get_one(state.products.as_ref(), id).await
}

#[utoipa::path(
    post, path = "/api/Product", tag = "product",
    request_body = crate::openapi::ProductDtoDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(dto): ApiJson<ProductDto>) -> Result<Response, ApiError> {
    crud::create(state.products.as_ref(), dto, BASE, KIND).await
}

#[utoipa::path(
    put, path = "/api/Product/{id}", tag = "product",
    params(("id" = i32, Path, description = "Product id")),
    request_body = crate::openapi::ProductDtoDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(dto): ApiJson<ProductDto>,
) -> Result<StatusCode, ApiError> {
    crud::replace(state.products.as_ref(), id, dto).await
}

#[utoipa::path(
    delete, path = "/api/Product/{id}", tag = "product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, ApiError> {
    crud::remove(state.products.as_ref(), id).await
}
