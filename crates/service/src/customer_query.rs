//! Customer aggregation: which customer placed the most orders.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use tracing::info;

use models::{customer, order};

use crate::errors::ServiceError;
use crate::store::{RecordStore, StoreError};

#[async_trait]
pub trait CustomerQuery: Send + Sync {
    /// Name of the customer with the highest order count.
    async fn most_orders_name(&self) -> Result<String, ServiceError>;
}

/// Counts orders per customer with one pass over each collection.
///
/// Ties go to the lowest customer id; customers without orders count as
/// zero. An empty customer collection yields `ServiceError::Unknown`.
pub struct MostOrdersQuery<C, O> {
    customers: Arc<C>,
    orders: Arc<O>,
}

impl<C, O> MostOrdersQuery<C, O> {
    pub fn new(customers: Arc<C>, orders: Arc<O>) -> Self {
        Self { customers, orders }
    }
}

#[async_trait]
impl<C, O> CustomerQuery for MostOrdersQuery<C, O>
where
    C: RecordStore<customer::Model> + 'static,
    O: RecordStore<order::Model> + 'static,
{
    async fn most_orders_name(&self) -> Result<String, ServiceError> {
        // orders 扫描结束后再扫描 customers，避免同时占用两个连接
        let counts = self
            .orders
            .scan()
            .try_fold(HashMap::<i32, usize>::new(), |mut acc, o| async move {
                *acc.entry(o.customer_id).or_default() += 1;
                Ok::<_, StoreError>(acc)
            })
            .await?;

        let mut best: Option<(usize, i32, String)> = None;
        let mut customers = self.customers.scan();
        while let Some(c) = customers.try_next().await? {
            let n = counts.get(&c.id).copied().unwrap_or(0);
            let wins = match &best {
                None => true,
                Some((top, top_id, _)) => n > *top || (n == *top && c.id < *top_id),
            };
            if wins {
                best = Some((n, c.id, c.name));
            }
        }

        match best {
            Some((n, id, name)) => {
                info!(customer_id = id, orders = n, "most_orders_customer");
                Ok(name)
            }
            None => Err(ServiceError::Unknown("no customers on record".into())),
        }
    }
}
