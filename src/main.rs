// src/main.rs
use shopspot::application::usecase::{CartStore, CheckoutService};
use shopspot::config::Config;
use shopspot::domain::errors::{AppError, AppResult};
use shopspot::domain::models::PaymentMethod;
use shopspot::domain::repository::CatalogRepository;
use shopspot::infrastructure::catalog::DemoCatalog;
use shopspot::infrastructure::orders::InMemoryOrderLog;
use shopspot::infrastructure::payment::MockPaymentGateway;
use shopspot::infrastructure::storage::JsonFileSnapshotRepository;

use std::sync::Arc;
use tokio::time::Duration;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration from a file when one is named, otherwise from
    // environment variables
    let config = match std::env::var("SHOPSPOT_CONFIG") {
        Ok(path) => Config::from_file(path)?,
        Err(_) => Config::from_env()?,
    };

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting shopspot demo v{}", env!("CARGO_PKG_VERSION"));

    // Build the demo catalog
    let catalog = DemoCatalog::new(config.catalog.shops_per_category);
    let shops = catalog.shops();
    log::info!("Generated {} demo shops", shops.len());

    // Create the cart store, restoring any snapshot from a previous run
    let snapshots = JsonFileSnapshotRepository::new(&config.storage.cart_snapshot_path);
    let mut store = CartStore::new(Box::new(snapshots));

    if !store.is_empty() {
        log::info!(
            "Restored cart: {} items, total {}",
            store.total_item_count(),
            store.total_price()
        );
    }

    // Log every cart change the way the UI would re-render on one
    let mut events = store.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            log::info!(
                "Cart changed ({:?}): {} items, total {}",
                event.change,
                event.total_item_count,
                event.total_price
            );
        }
    });

    // Simulate a browsing session against the nearest restaurant
    let shop = shops
        .iter()
        .find(|s| !catalog.menu_items(&s.id).is_empty())
        .ok_or_else(|| AppError::Catalog("no shops with menus".to_string()))?;
    log::info!("Browsing {} ({:.1} km away)", shop.name, shop.distance_km);

    let menu = catalog.menu_items(&shop.id);
    store.add_item(&menu[0]);
    store.add_item(&menu[0]);
    store.add_item(&menu[1]);
    store.update_quantity(&menu[1].id, 3);

    // Check out with the mocked payment gateway
    let gateway = if config.payment.decline_all {
        MockPaymentGateway::declining(Duration::from_millis(config.payment.delay_ms))
    } else {
        MockPaymentGateway::new(Duration::from_millis(config.payment.delay_ms))
    };
    let order_log = InMemoryOrderLog::new();
    let checkout = CheckoutService::new(Arc::new(gateway), Box::new(order_log.clone()));

    match checkout
        .place_order(&mut store, PaymentMethod::CashOnDelivery)
        .await
    {
        Ok(order) => {
            log::info!(
                "Order {} placed: {} lines, total {}, transaction {}",
                order.id,
                order.lines.len(),
                order.total,
                order.receipt.transaction_id
            );
        }
        Err(e) => {
            log::error!("Checkout failed, cart kept for retry: {}", e);
        }
    }

    log::info!("Orders recorded this session: {}", order_log.all().len());

    Ok(())
}
