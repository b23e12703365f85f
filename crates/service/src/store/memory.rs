use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use super::{Record, RecordStore, RecordStream, StoreError};

/// In-memory record store for tests and local wiring.
///
/// Writes are staged until [`RecordStore::commit`]; reads and scans only see
/// committed rows. Scans iterate in ascending id order.
pub struct MemoryStore<R> {
    state: Mutex<State<R>>,
}

struct State<R> {
    rows: BTreeMap<i32, R>,
    pending: Vec<Pending<R>>,
    // i64 以免在 i32::MAX 处溢出
    next_id: i64,
    commits: u64,
}

enum Pending<R> {
    Put(R),
    Remove(i32),
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self {
            state: Mutex::new(State { rows: BTreeMap::new(), pending: Vec::new(), next_id: 1, commits: 0 }),
        }
    }
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self { Self::default() }

    /// Start from committed rows, keeping their identifiers.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Self {
        let store = Self::default();
        {
            let mut state = store.lock();
            for r in records {
                state.next_id = state.next_id.max(i64::from(r.id()) + 1);
                state.rows.insert(r.id(), r);
            }
        }
        store
    }

    /// Writes staged since the last commit.
    pub fn pending_writes(&self) -> usize { self.lock().pending.len() }

    pub fn commits(&self) -> u64 { self.lock().commits }

    pub fn len(&self) -> usize { self.lock().rows.len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    fn lock(&self) -> MutexGuard<'_, State<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    async fn find_by_id(&self, id: i32) -> Result<Option<R>, StoreError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    fn scan(&self) -> RecordStream<'_, R> {
        let rows: Vec<R> = self.lock().rows.values().cloned().collect();
        stream::iter(rows.into_iter().map(Ok)).boxed()
    }

    async fn insert(&self, mut record: R) -> Result<R, StoreError> {
        let mut state = self.lock();
        let id = i32::try_from(state.next_id).map_err(|_| StoreError::IdExhausted)?;
        record.set_id(id);
        state.next_id += 1;
        state.pending.push(Pending::Put(record.clone()));
        Ok(record)
    }

    async fn persist(&self, record: R) -> Result<(), StoreError> {
        self.lock().pending.push(Pending::Put(record));
        Ok(())
    }

    async fn remove(&self, record: R) -> Result<(), StoreError> {
        self.lock().pending.push(Pending::Remove(record.id()));
        Ok(())
    }

    async fn commit(&self) -> Result<(), StoreError> {
        let mut state = self.lock();
        let pending = std::mem::take(&mut state.pending);
        for op in pending {
            match op {
                Pending::Put(r) => { state.rows.insert(r.id(), r); }
                Pending::Remove(id) => { state.rows.remove(&id); }
            }
        }
        state.commits += 1;
        Ok(())
    }
}
