use axum::{extract::State, http::StatusCode, response::Response, Json};
use models::order;
use service::resources::OrderDto;

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::routes::crud;
use crate::state::ServerState;

pub const BASE: &str = "/api/Order";
const KIND: &str = "Order";

#[utoipa::path(
    get, path = "/api/Order/GetAllOrders", tag = "order",
    responses((status = 200, description = "All orders", body = [crate::openapi::OrderDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<order::Model>>, ApiError> {
    crud::list(state.orders.as_ref(), KIND).await
}

#[utoipa::path(
    get, path = "/api/Order/{id}", tag = "order",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order", body = crate::openapi::OrderDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<order::Model>, ApiError> {
    crud::get_one(state.orders.as_ref(), id).await
}

#[utoipa::path(
    post, path = "/api/Order", tag = "order",
    request_body = crate::openapi::OrderDtoDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::OrderDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(dto): ApiJson<OrderDto>) -> Result<Response, ApiError> {
    crud::create(state.orders.as_ref(), dto, BASE, KIND).await
}

#[utoipa::path(
    put, path = "/api/Order/{id}", tag = "order",
    params(("id" = i32, Path, description = "Order id")),
    request_body = crate::openapi::OrderDtoDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(dto): ApiJson<OrderDto>,
) -> Result<StatusCode, ApiError> {
    crud::replace(state.orders.as_ref(), id, dto).await
}

#[utoipa::path(
    delete, path = "/api/Order/{id}", tag = "order",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, ApiError> {
    crud::remove(state.orders.as_ref(), id).await
}
