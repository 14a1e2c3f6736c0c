pub mod cart_usecase;
pub mod checkout_usecase;

// Re-export public API
pub use cart_usecase::{CartChange, CartEvent, CartStore};
pub use checkout_usecase::CheckoutService;
