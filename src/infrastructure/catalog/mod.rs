// src/infrastructure/catalog/mod.rs
// Demo catalog provider

use chrono::{Duration as ChronoDuration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::domain::models::{CatalogItem, Offer, OpeningHours, Shop, ShopCategory};
use crate::domain::repository::CatalogRepository;

const SHOP_NAMES: [&str; 6] = [
    "Sunrise", "Corner", "Golden", "Urban", "Riverside", "Central",
];

// name, description, price, category, vegetarian
const MENU_TABLE: [(&str, &str, Decimal, &str, bool); 8] = [
    ("Masala Chai", "Spiced milk tea", dec!(2.50), "Beverages", true),
    ("Samosa", "Crisp potato pastry", dec!(3.00), "Starters", true),
    ("Mango Lassi", "Sweet yogurt drink", dec!(4.00), "Beverages", true),
    ("Paneer Tikka", "Grilled cottage cheese", dec!(7.50), "Starters", true),
    ("Chicken Biryani", "Fragrant rice with chicken", dec!(11.00), "Mains", false),
    ("Dal Makhani", "Slow-cooked black lentils", dec!(8.25), "Mains", true),
    ("Fish Curry", "Coconut fish curry", dec!(12.40), "Mains", false),
    ("Gulab Jamun", "Syrup-soaked dumplings", dec!(4.75), "Desserts", true),
];

/// Deterministic demo catalog: a fixed number of shops per category, each
/// with offers and a menu drawn from a fixed table. Deterministic so demo
/// runs and tests see the same catalog every time.
pub struct DemoCatalog {
    shops: Vec<Shop>,
    menus: HashMap<String, Vec<CatalogItem>>,
}

impl DemoCatalog {
    pub fn new(shops_per_category: usize) -> Self {
        let mut shops = Vec::new();
        let mut menus = HashMap::new();

        for (cat_index, category) in ShopCategory::ALL.iter().enumerate() {
            for i in 0..shops_per_category {
                let shop = build_shop(*category, cat_index, i);
                menus.insert(shop.id.clone(), build_menu(&shop.id, cat_index + i));
                shops.push(shop);
            }
        }

        // Nearest first, matching how the browse page presents them.
        shops.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Self { shops, menus }
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new(10)
    }
}

impl CatalogRepository for DemoCatalog {
    fn shops(&self) -> Vec<Shop> {
        self.shops.clone()
    }

    fn menu_items(&self, shop_id: &str) -> Vec<CatalogItem> {
        self.menus.get(shop_id).cloned().unwrap_or_default()
    }
}

fn build_shop(category: ShopCategory, cat_index: usize, index: usize) -> Shop {
    let id = format!("shop-{}-{}", category.as_str(), index + 1);
    let name = format!(
        "{} {}",
        SHOP_NAMES[(cat_index + index) % SHOP_NAMES.len()],
        category.as_str()
    );
    let offer_count = (cat_index + index) % 4;

    Shop {
        id: id.clone(),
        name,
        category,
        image: format!("https://images.example.com/800x600/{}/{}", category, index),
        rating: 3.0 + ((cat_index + index) % 5) as f64 * 0.4,
        rating_count: 10 + ((cat_index * 37 + index * 13) % 490) as u32,
        address: format!("{} Market Street", 12 + index * 7),
        distance_km: 0.1 + ((cat_index * 3 + index * 5) % 50) as f64 / 10.0,
        description: format!("Local {} spot in your neighborhood", category),
        opening_hours: OpeningHours {
            open: format!("{}:00 AM", 6 + index % 5),
            close: format!("{}:00 PM", 5 + index % 6),
        },
        offers: build_offers(&id, offer_count),
    }
}

fn build_offers(shop_id: &str, count: usize) -> Vec<Offer> {
    (0..count)
        .map(|i| Offer {
            id: format!("{}-offer-{}", shop_id, i + 1),
            title: format!("Deal of the week #{}", i + 1),
            discount: 5 + (i as u32 * 10) % 40,
            valid_until: Utc::now() + ChronoDuration::days(7 + i as i64),
            description: "Limited time in-store discount".to_string(),
        })
        .collect()
}

fn build_menu(shop_id: &str, offset: usize) -> Vec<CatalogItem> {
    MENU_TABLE
        .iter()
        .enumerate()
        .map(|(i, (name, description, price, category, is_vegetarian))| {
            let slot = (offset + i) % MENU_TABLE.len();
            CatalogItem {
                id: format!("{}-item-{}", shop_id, slot + 1),
                name: name.to_string(),
                description: description.to_string(),
                price: *price,
                image: format!("https://images.example.com/food/{}", slot + 1),
                category: category.to_string(),
                is_vegetarian: *is_vegetarian,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_shops_for_every_category() {
        let catalog = DemoCatalog::new(3);
        let shops = catalog.shops();
        assert_eq!(shops.len(), 3 * ShopCategory::ALL.len());
        for category in ShopCategory::ALL {
            assert_eq!(shops.iter().filter(|s| s.category == category).count(), 3);
        }
    }

    #[test]
    fn shops_are_sorted_by_distance() {
        let catalog = DemoCatalog::new(5);
        let shops = catalog.shops();
        assert!(shops
            .windows(2)
            .all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[test]
    fn every_shop_has_a_menu_with_unique_item_ids() {
        let catalog = DemoCatalog::new(2);
        for shop in catalog.shops() {
            let items = catalog.menu_items(&shop.id);
            assert!(!items.is_empty());
            let mut ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), items.len());
        }
    }

    #[test]
    fn unknown_shop_has_no_menu() {
        let catalog = DemoCatalog::new(1);
        assert!(catalog.menu_items("shop-missing").is_empty());
    }

    #[test]
    fn catalog_is_deterministic() {
        let a = DemoCatalog::new(4);
        let b = DemoCatalog::new(4);
        let ids_a: Vec<_> = a.shops().iter().map(|s| s.id.clone()).collect();
        let ids_b: Vec<_> = b.shops().iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids_a, ids_b);
    }
}
