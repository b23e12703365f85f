use axum::{extract::State, http::StatusCode, response::Response, Json};
use models::customer;
use service::resources::CustomerDto;

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::routes::crud;
use crate::state::ServerState;

pub const BASE: &str = "/api/Customer";
const KIND: &str = "Customer";

#[utoipa::path(
    get, path = "/api/Customer/GetAllCustomers", tag = "customer",
    responses((status = 200, description = "All customers", body = [crate::openapi::CustomerDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<customer::Model>>, ApiError> {
    crud::list(state.customers.as_ref(), KIND).await
}

#[utoipa::path(
    get, path = "/api/Customer/{id}", tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<customer::Model>, ApiError> {
    crud::get_one(state.customers.as_ref(), id).await
}

#[utoipa::path(
    post, path = "/api/Customer", tag = "customer",
    request_body = crate::openapi::CustomerDtoDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(dto): ApiJson<CustomerDto>) -> Result<Response, ApiError> {
    crud::create(state.customers.as_ref(), dto, BASE, KIND).await
}

#[utoipa::path(
    put, path = "/api/Customer/{id}", tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = crate::openapi::CustomerDtoDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(dto): ApiJson<CustomerDto>,
) -> Result<StatusCode, ApiError> {
    crud::replace(state.customers.as_ref(), id, dto).await
}

#[utoipa::path(
    delete, path = "/api/Customer/{id}", tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, ApiError> {
    crud::remove(state.customers.as_ref(), id).await
}

#[utoipa::path(
    get, path = "/api/Customer/Name", tag = "customer",
    responses(
        (status = 200, description = "Name of the customer with the most orders", body = String),
        (status = 400, description = "No customers on record", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn most_orders_name(State(state): State<ServerState>) -> Result<Json<String>, ApiError> {
    let name = state.customer_query.most_orders_name().await?;
    Ok(Json(name))
}
