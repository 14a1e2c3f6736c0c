// src/application/usecase/cart_usecase.rs
// Cart store use case: wraps the pure cart with persistence and change
// notification.

use rust_decimal::Decimal;
use tokio::sync::broadcast;

use crate::domain::cart::{Cart, CartLine};
use crate::domain::models::CatalogItem;
use crate::domain::repository::CartSnapshotRepository;

/// What a single cart mutation did.
#[derive(Debug, Clone, PartialEq)]
pub enum CartChange {
    ItemAdded { item_id: String },
    ItemRemoved { item_id: String },
    QuantityUpdated { item_id: String, quantity: u32 },
    Cleared,
}

/// Broadcast to observers after every mutation. Carries the new derived
/// totals so a renderer does not have to re-read the store.
#[derive(Debug, Clone)]
pub struct CartEvent {
    pub change: CartChange,
    pub total_item_count: u64,
    pub total_price: Decimal,
}

/// The authoritative in-session cart.
///
/// Every mutation applies the in-memory transition first, then writes the
/// snapshot, then emits exactly one event — observers always see fully
/// applied state. A snapshot write failure is logged and swallowed: the
/// in-memory cart stays authoritative for the rest of the session.
pub struct CartStore {
    cart: Cart,
    snapshots: Box<dyn CartSnapshotRepository>,
    event_tx: broadcast::Sender<CartEvent>,
}

impl CartStore {
    /// Create a store, restoring the persisted snapshot if one exists.
    /// A corrupt or unreadable snapshot degrades to an empty cart.
    pub fn new(snapshots: Box<dyn CartSnapshotRepository>) -> Self {
        let cart = match snapshots.load() {
            Ok(lines) => Cart::from_lines(lines),
            Err(e) => {
                log::warn!("Failed to restore cart snapshot, starting empty: {}", e);
                Cart::new()
            }
        };

        let (event_tx, _) = broadcast::channel(16);

        Self {
            cart,
            snapshots,
            event_tx,
        }
    }

    /// Subscribe to cart change events.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.event_tx.subscribe()
    }

    /// Add one unit of `item`, merging into an existing line for the same id.
    pub fn add_item(&mut self, item: &CatalogItem) {
        self.cart.add_item(item);
        log::debug!("Added {} to cart", item.id);
        self.persist_and_notify(CartChange::ItemAdded {
            item_id: item.id.clone(),
        });
    }

    /// Remove the line for `item_id`; unknown ids are a no-op but still
    /// persist and notify, matching the "defined no-op" contract.
    pub fn remove_item(&mut self, item_id: &str) {
        self.cart.remove_item(item_id);
        self.persist_and_notify(CartChange::ItemRemoved {
            item_id: item_id.to_string(),
        });
    }

    /// Set an existing line to an absolute quantity; below 1 removes it.
    pub fn update_quantity(&mut self, item_id: &str, quantity: i64) {
        self.cart.update_quantity(item_id, quantity);
        // Report what the cart actually holds, not what was requested:
        // 0 when the line was removed or never existed, the clamped value
        // otherwise.
        let stored = self
            .cart
            .lines()
            .iter()
            .find(|l| l.item.id == item_id)
            .map(|l| l.quantity)
            .unwrap_or(0);
        self.persist_and_notify(CartChange::QuantityUpdated {
            item_id: item_id.to_string(),
            quantity: stored,
        });
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist_and_notify(CartChange::Cleared);
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn total_item_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    pub fn total_price(&self) -> Decimal {
        self.cart.total_price()
    }

    // Snapshot write happens before the event so observers never outrun
    // the persisted state.
    fn persist_and_notify(&self, change: CartChange) {
        if let Err(e) = self.snapshots.save(self.cart.lines()) {
            log::error!("Failed to persist cart snapshot: {}", e);
        }

        // No receivers is fine; nobody is rendering yet.
        let _ = self.event_tx.send(CartEvent {
            change,
            total_item_count: self.cart.total_item_count(),
            total_price: self.cart.total_price(),
        });
    }
}
