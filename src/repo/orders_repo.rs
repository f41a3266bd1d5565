use crate::domain::order::OrderRecord;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("order {0} already exists")]
    Duplicate(String),
}

/// Storage for order records, keyed by order id.
#[async_trait::async_trait]
pub trait OrderStore: Send + Sync {
    /// Fails with [`StoreError::Duplicate`] instead of overwriting an existing id.
    async fn insert(&self, order: OrderRecord) -> Result<(), StoreError>;

    async fn get(&self, order_id: &str) -> Result<Option<OrderRecord>, StoreError>;

    /// Returns `false` when no such order exists.
    async fn mark_purchased(&self, order_id: &str) -> Result<bool, StoreError>;

    /// All orders in insertion order.
    async fn list(&self) -> Result<Vec<OrderRecord>, StoreError>;
}

#[derive(Default)]
struct Ledger {
    orders: Vec<OrderRecord>,
    index: HashMap<String, usize>,
}

/// Process-lifetime ledger. Contents are lost on restart.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<Ledger>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: OrderRecord) -> Result<(), StoreError> {
        let mut ledger = self.inner.write().await;
        if ledger.index.contains_key(&order.order_id) {
            return Err(StoreError::Duplicate(order.order_id));
        }
        let position = ledger.orders.len();
        ledger.index.insert(order.order_id.clone(), position);
        ledger.orders.push(order);
        Ok(())
    }

    async fn get(&self, order_id: &str) -> Result<Option<OrderRecord>, StoreError> {
        let ledger = self.inner.read().await;
        Ok(ledger
            .index
            .get(order_id)
            .and_then(|&i| ledger.orders.get(i))
            .cloned())
    }

    async fn mark_purchased(&self, order_id: &str) -> Result<bool, StoreError> {
        let mut ledger = self.inner.write().await;
        let Some(&position) = ledger.index.get(order_id) else {
            return Ok(false);
        };
        match ledger.orders.get_mut(position) {
            Some(order) => {
                order.mark_purchased();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<OrderRecord>, StoreError> {
        Ok(self.inner.read().await.orders.clone())
    }
}
