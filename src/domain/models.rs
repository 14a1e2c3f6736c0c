// src/domain/models.rs
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::cart::CartLine;

/// Core Catalog Components
///
/// A purchasable entity supplied by the catalog provider. The cart copies
/// the descriptive fields through unchanged; only `id` and `price` carry
/// meaning for cart semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: String,
    pub is_vegetarian: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub category: ShopCategory,
    pub image: String,
    pub rating: f64,
    pub rating_count: u32,
    pub address: String,
    /// Distance from the browsing user, in km.
    pub distance_km: f64,
    pub description: String,
    pub opening_hours: OpeningHours,
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShopCategory {
    Clothing,
    Grocery,
    Restaurant,
    StreetFood,
    Electronics,
    Home,
}

impl ShopCategory {
    pub const ALL: [ShopCategory; 6] = [
        ShopCategory::Clothing,
        ShopCategory::Grocery,
        ShopCategory::Restaurant,
        ShopCategory::StreetFood,
        ShopCategory::Electronics,
        ShopCategory::Home,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShopCategory::Clothing => "clothing",
            ShopCategory::Grocery => "grocery",
            ShopCategory::Restaurant => "restaurant",
            ShopCategory::StreetFood => "streetFood",
            ShopCategory::Electronics => "electronics",
            ShopCategory::Home => "home",
        }
    }
}

impl fmt::Display for ShopCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open: String,
    pub close: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    /// Discount percentage off the listed price.
    pub discount: u32,
    pub valid_until: DateTime<Utc>,
    pub description: String,
}

/// Checkout Components
#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub payment_method: PaymentMethod,
    pub placed_at: DateTime<Utc>,
    pub receipt: PaymentReceipt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CashOnDelivery,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "COD",
            PaymentMethod::Card => "CARD",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub message: String,
    pub processed_at: DateTime<Utc>,
}
