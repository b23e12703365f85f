//! Handler bodies shared by the four entity controllers.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::TryStreamExt;
use serde::Serialize;
use service::store::Record;
use service::CrudService;
use tracing::info;

use crate::errors::ApiError;

pub async fn list<E, D>(svc: &dyn CrudService<E, D>, kind: &'static str) -> Result<Json<Vec<E>>, ApiError>
where
    E: Serialize + Send,
{
    let items: Vec<E> = svc.get_all().try_collect().await?;
    info!(entity = kind, count = items.len(), "list records");
    Ok(Json(items))
}

pub async fn get_one<E, D>(svc: &dyn CrudService<E, D>, id: i32) -> Result<Json<E>, ApiError>
where
    E: Serialize,
{
    Ok(Json(svc.get(id).await?))
}

/// 201 with a `Location` header pointing at `{base}/{id}`.
pub async fn create<E, D>(svc: &dyn CrudService<E, D>, dto: D, base: &str, kind: &'static str) -> Result<Response, ApiError>
where
    E: Serialize + Record,
{
    let created = svc.add(dto).await?;
    info!(entity = kind, id = created.id(), "Added new {}", kind);
    let location = format!("{}/{}", base, created.id());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response())
}

pub async fn replace<E, D>(svc: &dyn CrudService<E, D>, id: i32, dto: D) -> Result<StatusCode, ApiError> {
    svc.update(dto, id).await?;
    info!(id, "Updated, {}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove<E, D>(svc: &dyn CrudService<E, D>, id: i32) -> Result<StatusCode, ApiError> {
    svc.delete(id).await?;
    info!(id, "Deleted, {}", id);
    Ok(StatusCode::NO_CONTENT)
}
