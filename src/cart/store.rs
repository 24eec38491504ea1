use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed key the serialized cart lives under in client-local storage. The
/// snapshot format is unversioned.
pub const CART_STORAGE_KEY: &str = "cart";

/// What the storefront hands over when something is added: the client-shaped
/// item, ids and prices as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variants: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CartItem,
    pub quantity: u32,
}

/// The shopper's cart. Two lines are the same entry iff the product ids
/// match and the variant selections are equal irrespective of key order.
#[derive(Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    /// Increments the matching line or appends a new one with quantity 1.
    /// An item without an id never enters the cart; it is dropped with a
    /// diagnostic so the cart cannot go inconsistent on malformed input.
    pub fn add_item(&mut self, item: CartItem) {
        if item.id.is_empty() {
            tracing::warn!("Rejected cart item without an id: {:?}", item.name);
            return;
        }

        let existing = self.lines.iter_mut().find(|line| {
            line.item.id == item.id
                && variants_equal(
                    line.item.selected_variants.as_ref(),
                    item.selected_variants.as_ref(),
                )
        });

        match existing {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
    }

    /// Removes the one line matching both the id and the variant selection.
    pub fn remove_item(&mut self, id: &str, variants: Option<&BTreeMap<String, String>>) {
        self.lines.retain(|line| {
            !(line.item.id == id && variants_equal(line.item.selected_variants.as_ref(), variants))
        });
    }

    /// Sets the matching line's quantity, clamped to a minimum of zero.
    /// Treating zero as "remove" is the caller's concern.
    pub fn update_quantity(
        &mut self,
        id: &str,
        variants: Option<&BTreeMap<String, String>>,
        quantity: i64,
    ) {
        for line in &mut self.lines {
            if line.item.id == id
                && variants_equal(line.item.selected_variants.as_ref(), variants)
            {
                line.quantity = quantity.max(0) as u32;
            }
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn cart_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn cart_total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| numeric_price(&line.item.price) * Decimal::from(line.quantity))
            .sum()
    }

    /// Serializes the cart for client-local storage (under
    /// [`CART_STORAGE_KEY`]).
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.lines)
    }

    /// Restores a saved cart; malformed JSON degrades to an empty cart with
    /// a diagnostic rather than an error.
    pub fn restore(saved: &str) -> Self {
        match serde_json::from_str(saved) {
            Ok(lines) => Self { lines },
            Err(e) => {
                tracing::warn!("Failed to parse saved cart: {}", e);
                Self::default()
            }
        }
    }
}

/// Canonical-form selection comparison: key order never matters. Both
/// selections absent counts as equal; absent vs. present does not.
pub fn variants_equal(
    a: Option<&BTreeMap<String, String>>,
    b: Option<&BTreeMap<String, String>>,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Parses a display price, tolerating currency symbols and thousands
/// separators: every character that is not an ASCII digit or `.` is dropped
/// before parsing. Unparseable input counts as zero.
pub fn numeric_price(price: &str) -> Decimal {
    let cleaned: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    cleaned.parse().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn item(id: &str, price: &str, variants: Option<&[(&str, &str)]>) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("product {}", id),
            price: price.to_string(),
            image: String::new(),
            selected_variants: variants.map(|pairs| {
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            }),
        }
    }

    #[test]
    fn adding_the_same_selection_twice_merges_into_one_line() {
        let mut cart = CartStore::new();
        cart.add_item(item("1", "100", Some(&[("Size", "M")])));
        cart.add_item(item("1", "100", Some(&[("Size", "M")])));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn different_selections_of_one_product_stay_separate_lines() {
        let mut cart = CartStore::new();
        cart.add_item(item("1", "100", Some(&[("Size", "M")])));
        cart.add_item(item("1", "100", Some(&[("Size", "L")])));
        cart.add_item(item("1", "100", None));

        assert_eq!(cart.items().len(), 3);
    }

    #[test]
    fn selection_identity_ignores_key_order() {
        let mut cart = CartStore::new();
        cart.add_item(item("1", "100", Some(&[("Size", "M"), ("Color", "Red")])));
        cart.add_item(item("1", "100", Some(&[("Color", "Red"), ("Size", "M")])));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn items_without_an_id_are_rejected_without_state_change() {
        let mut cart = CartStore::new();
        cart.add_item(item("", "100", None));

        assert!(cart.items().is_empty());
        assert_eq!(cart.cart_count(), 0);
    }

    #[test]
    fn remove_matches_id_and_selection_together() {
        let mut cart = CartStore::new();
        cart.add_item(item("1", "100", None));

        // Non-matching selection leaves the line untouched.
        let other = BTreeMap::from([("Size".to_string(), "M".to_string())]);
        cart.remove_item("1", Some(&other));
        assert_eq!(cart.items().len(), 1);

        cart.remove_item("1", None);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn update_quantity_clamps_at_zero() {
        let mut cart = CartStore::new();
        cart.add_item(item("1", "100", None));

        cart.update_quantity("1", None, 5);
        assert_eq!(cart.items()[0].quantity, 5);

        cart.update_quantity("1", None, -3);
        assert_eq!(cart.items()[0].quantity, 0);
    }

    #[test]
    fn total_tolerates_currency_symbols_and_separators() {
        let mut cart = CartStore::new();
        cart.add_item(item("1", "₹1,499", None));
        cart.add_item(item("1", "₹1,499", None));
        cart.add_item(item("2", "999", None));

        assert_eq!(cart.cart_total(), dec!(3997));
        assert_eq!(cart.cart_count(), 3);
    }

    #[test]
    fn unparseable_price_counts_as_zero() {
        assert_eq!(numeric_price("free"), Decimal::ZERO);
        assert_eq!(numeric_price(""), Decimal::ZERO);
        assert_eq!(numeric_price("₹2,350.50"), dec!(2350.50));
    }

    #[test]
    fn snapshot_round_trips_through_storage() {
        let mut cart = CartStore::new();
        cart.add_item(item("1", "100", Some(&[("Size", "M")])));
        cart.add_item(item("1", "100", Some(&[("Size", "M")])));

        let mut storage: BTreeMap<&str, String> = BTreeMap::new();
        storage.insert(CART_STORAGE_KEY, cart.snapshot().unwrap());

        let restored = CartStore::restore(&storage[CART_STORAGE_KEY]);
        assert_eq!(restored.items(), cart.items());
        assert_eq!(restored.cart_count(), 2);
    }

    #[test]
    fn restore_of_malformed_json_starts_empty() {
        let cart = CartStore::restore("{not json");
        assert!(cart.items().is_empty());
    }
}
