// src/domain/cart.rs
// Pure cart state and its transition rules. No I/O here; persistence and
// change notification live in the application layer so these rules can be
// tested on their own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::models::CatalogItem;

/// One catalog item plus its quantity within a cart.
///
/// Quantity is always >= 1; a transition that would drop it below 1 removes
/// the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: CatalogItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// The session-scoped collection of selected catalog items.
///
/// Holds at most one line per distinct item id; repeated adds merge into the
/// existing line. Insertion order is preserved for stable rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild a cart from persisted lines, re-establishing the invariants
    /// a hand-edited or stale snapshot may have lost: lines with quantity
    /// below 1 are dropped and duplicate ids are merged into one line.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity < 1 {
                continue;
            }
            match cart.lines.iter_mut().find(|l| l.item.id == line.item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity)
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Add one unit of `item`. An existing line for the same id is
    /// incremented; otherwise a new line with quantity 1 is appended.
    /// The increment is fixed at one unit per call; batch quantity changes
    /// go through `update_quantity`.
    pub fn add_item(&mut self, item: &CatalogItem) {
        match self.lines.iter_mut().find(|l| l.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::new(item.clone())),
        }
    }

    /// Remove the line for `item_id`. Unknown ids are a no-op.
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item.id != item_id);
    }

    /// Set the quantity of an existing line. A quantity below 1 removes the
    /// line; an unknown id is a no-op (only `add_item` creates lines).
    /// Values beyond `u32::MAX` saturate rather than wrap, so a stored line
    /// can never end up below 1.
    pub fn update_quantity(&mut self, item_id: &str, quantity: i64) {
        if quantity < 1 {
            self.remove_item(item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all line quantities; 0 for an empty cart.
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of price x quantity over all lines; 0 for an empty cart.
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(|l| l.line_total()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(id: &str, name: &str, price: Decimal) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            image: String::new(),
            category: "Starters".to_string(),
            is_vegetarian: false,
        }
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let cart = Cart::new();
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
        assert!(cart.is_empty());
    }

    #[test]
    fn add_single_item() {
        let mut cart = Cart::new();
        cart.add_item(&item("a", "Tea", dec!(2.50)));
        assert_eq!(cart.total_item_count(), 1);
        assert_eq!(cart.total_price(), dec!(2.50));
    }

    #[test]
    fn repeated_add_merges_into_one_line() {
        let mut cart = Cart::new();
        let tea = item("a", "Tea", dec!(2.50));
        cart.add_item(&tea);
        cart.add_item(&tea);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_price(), dec!(5.00));
    }

    #[test]
    fn update_quantity_is_an_absolute_set() {
        let mut cart = Cart::new();
        let tea = item("a", "Tea", dec!(2.50));
        cart.add_item(&tea);
        cart.add_item(&tea);
        cart.update_quantity("a", 5);
        assert_eq!(cart.total_item_count(), 5);
        assert_eq!(cart.total_price(), dec!(12.50));
    }

    #[test]
    fn remove_item_empties_its_line() {
        let mut cart = Cart::new();
        cart.add_item(&item("a", "Tea", dec!(2.50)));
        cart.update_quantity("a", 5);
        cart.remove_item("a");
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn two_distinct_items_keep_separate_lines() {
        let mut cart = Cart::new();
        cart.add_item(&item("a", "Samosa", dec!(3.00)));
        cart.add_item(&item("b", "Lassi", dec!(4.00)));
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(cart.total_price(), dec!(7.00));
    }

    #[test]
    fn quantity_below_one_removes_the_line() {
        let mut cart = Cart::new();
        cart.add_item(&item("a", "Tea", dec!(2.50)));
        cart.update_quantity("a", 0);
        assert!(cart.lines().iter().all(|l| l.item.id != "a"));

        cart.add_item(&item("a", "Tea", dec!(2.50)));
        cart.update_quantity("a", -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn oversized_quantity_saturates_instead_of_wrapping() {
        let mut cart = Cart::new();
        cart.add_item(&item("a", "Tea", dec!(2.50)));

        // One past u32::MAX used to wrap to a live line with quantity 0.
        cart.update_quantity("a", i64::from(u32::MAX) + 1);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));

        cart.update_quantity("a", i64::from(u32::MAX) + 5);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn restore_drops_zero_quantity_lines() {
        let mut dead = CartLine::new(item("a", "Tea", dec!(2.50)));
        dead.quantity = 0;
        let live = CartLine::new(item("b", "Samosa", dec!(3.00)));

        let cart = Cart::from_lines(vec![dead, live]);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].item.id, "b");
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn restore_merges_duplicate_ids_into_one_line() {
        let mut first = CartLine::new(item("a", "Tea", dec!(2.50)));
        first.quantity = 2;
        let mut second = CartLine::new(item("a", "Tea", dec!(2.50)));
        second.quantity = 3;

        let cart = Cart::from_lines(vec![first, second]);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total_price(), dec!(12.50));
    }

    #[test]
    fn unknown_id_mutations_are_noops() {
        let mut cart = Cart::new();
        cart.add_item(&item("a", "Tea", dec!(2.50)));
        let before = cart.clone();

        cart.remove_item("nonexistent");
        assert_eq!(cart, before);

        cart.update_quantity("nonexistent", 3);
        assert_eq!(cart, before);
    }

    #[test]
    fn update_quantity_never_creates_lines() {
        let mut cart = Cart::new();
        cart.update_quantity("ghost", 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let mut cart = Cart::new();
        cart.add_item(&item("a", "Samosa", dec!(3.00)));
        cart.add_item(&item("b", "Lassi", dec!(4.00)));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn totals_track_a_mixed_cart() {
        let mut cart = Cart::new();
        let tea = item("a", "Tea", dec!(2.50));
        let samosa = item("b", "Samosa", dec!(3.00));
        cart.add_item(&tea);
        cart.add_item(&tea);
        cart.add_item(&samosa);
        cart.update_quantity("b", 3);
        assert_eq!(cart.total_item_count(), 5);
        assert_eq!(cart.total_price(), dec!(14.00));
    }
}
