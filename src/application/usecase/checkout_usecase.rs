// src/application/usecase/checkout_usecase.rs
// Checkout use case: turn the current cart into an order, run the payment
// gateway, and clear the cart only once the order is durably recorded.

use chrono::Utc;
use std::sync::Arc;

use crate::application::usecase::cart_usecase::CartStore;
use crate::domain::errors::{CheckoutError, CheckoutResult};
use crate::domain::models::{Order, PaymentMethod};
use crate::domain::repository::{OrderRepository, PaymentGateway};

pub struct CheckoutService {
    gateway: Arc<dyn PaymentGateway>,
    orders: Box<dyn OrderRepository>,
}

impl CheckoutService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, orders: Box<dyn OrderRepository>) -> Self {
        Self { gateway, orders }
    }

    /// Place an order for the store's current contents.
    ///
    /// The cart is cleared exactly once, after the payment succeeded and the
    /// order was recorded; any earlier failure leaves the cart untouched so
    /// the shopper can retry.
    pub async fn place_order(
        &self,
        store: &mut CartStore,
        method: PaymentMethod,
    ) -> CheckoutResult<Order> {
        if store.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order_id = format!(
            "ord_{:x}",
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        );
        let total = store.total_price();

        log::info!(
            "Placing order {} ({} items, total {}) via {}",
            order_id,
            store.total_item_count(),
            total,
            method
        );

        let receipt = self.gateway.process_payment(&order_id, total).await?;

        let order = Order {
            id: order_id,
            lines: store.lines().to_vec(),
            total,
            payment_method: method,
            placed_at: Utc::now(),
            receipt,
        };

        self.orders
            .record(&order)
            .map_err(|e| CheckoutError::Recording(e.to_string()))?;

        store.clear();
        log::info!("Order {} placed, transaction {}", order.id, order.receipt.transaction_id);

        Ok(order)
    }
}
