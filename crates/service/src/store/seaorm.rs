use std::marker::PhantomData;

use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait,
};

use super::{Record, RecordStore, RecordStream, StoreError};

/// SeaORM-backed record store for entity `E`.
///
/// Each statement runs on the pooled connection in autocommit mode, so
/// [`RecordStore::commit`] has nothing left to flush.
pub struct SeaOrmStore<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmStore<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

#[async_trait]
impl<E> RecordStore<E::Model> for SeaOrmStore<E>
where
    E: EntityTrait,
    E::Model: Record + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    async fn find_by_id(&self, id: i32) -> Result<Option<E::Model>, StoreError> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    fn scan(&self) -> RecordStream<'_, E::Model> {
        stream::once(E::find().stream(&self.db))
            .try_flatten()
            .map_err(StoreError::from)
            .boxed()
    }

    async fn insert(&self, record: E::Model) -> Result<E::Model, StoreError> {
        let mut am = record.into_active_model();
        // 主键由数据库自增分配
        for key in E::PrimaryKey::iter() {
            am.not_set(key.into_column());
        }
        Ok(am.insert(&self.db).await?)
    }

    async fn persist(&self, record: E::Model) -> Result<(), StoreError> {
        record.into_active_model().reset_all().update(&self.db).await?;
        Ok(())
    }

    async fn remove(&self, record: E::Model) -> Result<(), StoreError> {
        E::delete_by_id(record.id()).exec(&self.db).await?;
        Ok(())
    }

    async fn commit(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
