// src/domain/repository/mod.rs
// Repository interfaces for domain entities

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::cart::CartLine;
use crate::domain::errors::{CheckoutResult, StorageResult};
use crate::domain::models::{CatalogItem, Order, PaymentReceipt, Shop};

/// Repository interface for the persisted cart snapshot.
///
/// `save` overwrites the snapshot unconditionally. `load` returns an empty
/// line list when no snapshot exists; a corrupt snapshot is an error the
/// caller is expected to degrade from, never to crash on.
pub trait CartSnapshotRepository: Send {
    fn save(&self, lines: &[CartLine]) -> StorageResult<()>;
    fn load(&self) -> StorageResult<Vec<CartLine>>;
}

/// Repository interface for the shop/menu catalog.
pub trait CatalogRepository {
    fn shops(&self) -> Vec<Shop>;
    fn menu_items(&self, shop_id: &str) -> Vec<CatalogItem>;
}

/// Interface for the payment step of checkout. The production application
/// would put a real processor behind this; the demo fakes one with a timer.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn process_payment(
        &self,
        order_id: &str,
        amount: Decimal,
    ) -> CheckoutResult<PaymentReceipt>;
}

/// Sink for durably recording a placed order before the cart is cleared.
pub trait OrderRepository: Send {
    fn record(&self, order: &Order) -> StorageResult<()>;
}
