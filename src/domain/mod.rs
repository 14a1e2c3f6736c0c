// src/domain/mod.rs
pub mod cart;
pub mod errors;
pub mod models;
pub mod repository;

// Re-export common types for convenience
pub use cart::{Cart, CartLine};
pub use errors::{
    AppError, AppResult, CheckoutError, CheckoutResult, StorageError, StorageResult,
};
pub use models::{
    CatalogItem, Offer, OpeningHours, Order, PaymentMethod, PaymentReceipt, Shop, ShopCategory,
};
