use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::models::Product;

/// Effective prices for one concrete variant selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrice {
    pub price: Decimal,
    pub original_price: Option<Decimal>,
}

/// Resolves the unit price for a product under a selection mapping each
/// dimension type to one chosen option label.
///
/// Dimensions are walked in the product's declaration order. An option's
/// override replaces the running value outright, so when several selected
/// options carry overrides, the last dimension in declaration order wins.
pub fn resolve_price(product: &Product, selection: &BTreeMap<String, String>) -> ResolvedPrice {
    let mut price = product.price;
    let mut original_price = product.original_price;

    for dimension in product.variants.iter() {
        let Some(label) = selection.get(&dimension.kind) else {
            continue;
        };
        let Some(option) = dimension.find_option(label) else {
            continue;
        };
        if let Some(override_price) = option.price_override() {
            price = override_price;
        }
        if let Some(override_original) = option.original_price_override() {
            original_price = Some(override_original);
        }
    }

    ResolvedPrice {
        price,
        original_price,
    }
}

impl ResolvedPrice {
    /// Percent-off badge value: `round(100 * (original - price) / original)`.
    ///
    /// `None` unless an original price is present and numerically greater
    /// than the effective price; callers simply don't render it then.
    pub fn percent_off(&self) -> Option<i32> {
        let original = self.original_price?;
        if original <= self.price || original.is_zero() {
            return None;
        }

        let percent = (original - self.price) / original * Decimal::from(100);
        percent
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i32()
    }
}
