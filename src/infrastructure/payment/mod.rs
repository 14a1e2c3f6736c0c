// src/infrastructure/payment/mod.rs
// Mock payment gateway implementation

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::time::{sleep, Duration};

use crate::domain::errors::{CheckoutError, CheckoutResult};
use crate::domain::models::PaymentReceipt;
use crate::domain::repository::PaymentGateway;

/// Payment gateway stand-in. Real processing is out of scope; this one
/// simulates the processor's latency with a timer and fabricates a
/// transaction id.
pub struct MockPaymentGateway {
    delay: Duration,
    decline_all: bool,
}

impl MockPaymentGateway {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            decline_all: false,
        }
    }

    /// A gateway that declines every payment, for exercising failure paths.
    pub fn declining(delay: Duration) -> Self {
        Self {
            delay,
            decline_all: true,
        }
    }
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn process_payment(
        &self,
        order_id: &str,
        amount: Decimal,
    ) -> CheckoutResult<PaymentReceipt> {
        log::debug!("Processing payment of {} for order {}", amount, order_id);
        sleep(self.delay).await;

        if self.decline_all {
            return Err(CheckoutError::PaymentDeclined(
                "payment simulation configured to decline".to_string(),
            ));
        }

        Ok(PaymentReceipt {
            transaction_id: format!(
                "txn_{:x}",
                Utc::now().timestamp_nanos_opt().unwrap_or_default()
            ),
            message: "Payment processed successfully".to_string(),
            processed_at: Utc::now(),
        })
    }
}
