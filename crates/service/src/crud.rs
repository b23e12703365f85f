use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::store::{Record, RecordStore};
use crate::validation::check_id;

/// Create/read/update/delete contract exposed to the dispatch layer for one
/// entity kind `E` and its transfer shape `D`.
#[async_trait]
pub trait CrudService<E, D>: Send + Sync {
    /// Lazily stream every stored record; call again to restart.
    fn get_all(&self) -> BoxStream<'_, Result<E, ServiceError>>;
    async fn get(&self, id: i32) -> Result<E, ServiceError>;
    async fn add(&self, dto: D) -> Result<E, ServiceError>;
    async fn update(&self, dto: D, id: i32) -> Result<(), ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// Client-supplied fields of an entity kind, plus the rules that turn them
/// into a persisted record.
pub trait Transfer: Send + Sync + 'static {
    type Record: Record;
    /// Entity kind name used in errors and logs.
    const KIND: &'static str;

    /// Check every numeric field before the store is touched.
    fn validate(&self) -> Result<(), ServiceError>;
    /// Build a fresh record; the store assigns its identifier.
    fn into_record(self) -> Self::Record;
    /// Overwrite every mutable field of `record`, leaving its id alone.
    fn apply_to(self, record: &mut Self::Record);
}

/// The single [`CrudService`] implementation, shared by all entity kinds.
pub struct RecordService<D, S> {
    store: Arc<S>,
    _dto: PhantomData<fn() -> D>,
}

impl<D, S> RecordService<D, S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store, _dto: PhantomData }
    }
}

impl<D: Transfer, S: RecordStore<D::Record>> RecordService<D, S> {
    async fn load(&self, id: i32) -> Result<D::Record, ServiceError> {
        match self.store.find_by_id(id).await? {
            Some(record) => Ok(record),
            None => {
                warn!(entity = D::KIND, id, "record_not_found");
                Err(ServiceError::not_found(D::KIND))
            }
        }
    }
}

#[async_trait]
impl<D, S> CrudService<D::Record, D> for RecordService<D, S>
where
    D: Transfer,
    S: RecordStore<D::Record> + 'static,
{
    fn get_all(&self) -> BoxStream<'_, Result<D::Record, ServiceError>> {
        self.store.scan().map_err(ServiceError::from).boxed()
    }

    async fn get(&self, id: i32) -> Result<D::Record, ServiceError> {
        check_id(id)?;
        self.load(id).await
    }

    async fn add(&self, dto: D) -> Result<D::Record, ServiceError> {
        dto.validate()?;
        let created = self.store.insert(dto.into_record()).await?;
        self.store.commit().await?;
        info!(entity = D::KIND, id = created.id(), "record_created");
        Ok(created)
    }

    async fn update(&self, dto: D, id: i32) -> Result<(), ServiceError> {
        check_id(id)?;
        dto.validate()?;
        let mut record = self.load(id).await?;
        dto.apply_to(&mut record);
        self.store.persist(record).await?;
        self.store.commit().await?;
        info!(entity = D::KIND, id, "record_updated");
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        check_id(id)?;
        let record = self.load(id).await?;
        self.store.remove(record).await?;
        self.store.commit().await?;
        info!(entity = D::KIND, id, "record_deleted");
        Ok(())
    }
}
