// src/infrastructure/orders/mod.rs
// Order log implementation

use std::sync::{Arc, Mutex};

use crate::domain::errors::{StorageError, StorageResult};
use crate::domain::models::Order;
use crate::domain::repository::OrderRepository;

/// In-memory order log. The production application records orders in its
/// hosted database; the demo keeps them for the lifetime of the session.
/// Clones share the same log.
#[derive(Clone, Default)]
pub struct InMemoryOrderLog {
    orders: Arc<Mutex<Vec<Order>>>,
}

impl InMemoryOrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Order> {
        self.orders.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

impl OrderRepository for InMemoryOrderLog {
    fn record(&self, order: &Order) -> StorageResult<()> {
        let mut orders = self
            .orders
            .lock()
            .map_err(|_| StorageError::Unavailable("order log lock poisoned".to_string()))?;
        orders.push(order.clone());
        Ok(())
    }
}
