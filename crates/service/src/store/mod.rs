//! Record store abstraction for the service layer
//!
//! A store owns identifier assignment and persistence for one entity kind.
//! Services only see this trait, so the SQL backend and the in-memory
//! backend are interchangeable.

pub mod memory;
pub mod seaorm;

use async_trait::async_trait;
use futures::stream::BoxStream;
use sea_orm::DbErr;
use thiserror::Error;

pub use memory::MemoryStore;
pub use seaorm::SeaOrmStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("identifier space exhausted")]
    IdExhausted,
}

/// Lazy sequence of records produced by [`RecordStore::scan`].
pub type RecordStream<'a, R> = BoxStream<'a, Result<R, StoreError>>;

/// A persisted row addressed by a positive integer primary key.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}

#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<R>, StoreError>;
    /// Every stored record in store order. Calling again restarts the scan.
    fn scan(&self) -> RecordStream<'_, R>;
    /// Store `record` under a freshly assigned identifier; its own id is ignored.
    async fn insert(&self, record: R) -> Result<R, StoreError>;
    /// Replace the stored row carrying `record.id()`.
    async fn persist(&self, record: R) -> Result<(), StoreError>;
    async fn remove(&self, record: R) -> Result<(), StoreError>;
    /// Flush pending writes.
    async fn commit(&self) -> Result<(), StoreError>;
}
