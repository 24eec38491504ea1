use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::cart::pricing;
use crate::models::{Product, VariantDimension};

/// One line on a point-of-sale bill. Lines are keyed by product id plus the
/// selected labels, so distinct selections of one product occupy distinct
/// lines.
#[derive(Debug, Clone)]
pub struct BillLine {
    pub key: String,
    pub product_id: i32,
    pub name: String,
    pub unit_price: Decimal,
    /// Operator's hand-entered price; wins over `unit_price` when set.
    pub custom_price: Option<Decimal>,
    pub quantity: u32,
    pub selected_variants: Option<BTreeMap<String, String>>,
}

impl BillLine {
    pub fn effective_price(&self) -> Decimal {
        self.custom_price.unwrap_or(self.unit_price)
    }

    pub fn line_total(&self) -> Decimal {
        self.effective_price() * Decimal::from(self.quantity)
    }
}

/// The bill under construction at the counter.
#[derive(Debug, Default)]
pub struct BillStore {
    lines: Vec<BillLine>,
}

impl BillStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[BillLine] {
        &self.lines
    }

    /// Adds a product at a selection, re-using the existing line when the
    /// key matches. The unit price is resolved from the selection.
    pub fn add(&mut self, product: &Product, selection: Option<BTreeMap<String, String>>) {
        let key = line_key(product.id, &product.variants, selection.as_ref());

        if let Some(line) = self.lines.iter_mut().find(|line| line.key == key) {
            line.quantity += 1;
            return;
        }

        let unit_price = match &selection {
            Some(selection) => pricing::resolve_price(product, selection).price,
            None => product.price,
        };

        self.lines.push(BillLine {
            key,
            product_id: product.id,
            name: product.name.clone(),
            unit_price,
            custom_price: None,
            quantity: 1,
            selected_variants: selection,
        });
    }

    pub fn set_quantity(&mut self, key: &str, quantity: i64) {
        for line in &mut self.lines {
            if line.key == key {
                line.quantity = quantity.max(0) as u32;
            }
        }
    }

    pub fn set_custom_price(&mut self, key: &str, price: Decimal) {
        for line in &mut self.lines {
            if line.key == key {
                line.custom_price = Some(price);
            }
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.lines.retain(|line| line.key != key);
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(BillLine::line_total).sum()
    }
}

/// The POS dialog's initial state: the first option of every dimension.
pub fn default_selection(dimensions: &[VariantDimension]) -> BTreeMap<String, String> {
    dimensions
        .iter()
        .filter_map(|dimension| {
            dimension
                .options
                .first()
                .map(|option| (dimension.kind.clone(), option.label().to_string()))
        })
        .collect()
}

/// `{product_id}-{label}-{label}` with labels in dimension declaration
/// order; the bare product id when no selection was made.
pub fn line_key(
    product_id: i32,
    dimensions: &[VariantDimension],
    selection: Option<&BTreeMap<String, String>>,
) -> String {
    match selection {
        Some(selection) => {
            let labels: Vec<&str> = dimensions
                .iter()
                .filter_map(|dimension| selection.get(&dimension.kind).map(String::as_str))
                .collect();
            format!("{}-{}", product_id, labels.join("-"))
        }
        None => product_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PricedOption, VariantOption};
    use chrono::Utc;
    use rust_decimal::dec;
    use sqlx::types::Json;

    fn product_with_sizes() -> Product {
        Product {
            id: 7,
            name: "Cotton Wicks".to_string(),
            price: dec!(50),
            original_price: None,
            images: vec![],
            badge: None,
            materials: vec![],
            tagline: None,
            description: None,
            category_id: None,
            variants: Json(vec![
                VariantDimension {
                    kind: "Size".to_string(),
                    options: vec![
                        VariantOption::Priced(PricedOption {
                            label: "Small".to_string(),
                            price: Some(dec!(50)),
                            original_price: None,
                        }),
                        VariantOption::Priced(PricedOption {
                            label: "Large".to_string(),
                            price: Some(dec!(90)),
                            original_price: None,
                        }),
                    ],
                },
                VariantDimension {
                    kind: "Color".to_string(),
                    options: vec![
                        VariantOption::Label("Red".to_string()),
                        VariantOption::Label("Blue".to_string()),
                    ],
                },
            ]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn defaults_pick_the_first_option_of_every_dimension() {
        let product = product_with_sizes();
        let defaults = default_selection(&product.variants);

        assert_eq!(defaults["Size"], "Small");
        assert_eq!(defaults["Color"], "Red");
    }

    #[test]
    fn line_keys_join_labels_in_declaration_order() {
        let product = product_with_sizes();
        let selection = BTreeMap::from([
            ("Color".to_string(), "Red".to_string()),
            ("Size".to_string(), "Large".to_string()),
        ]);

        // Declaration order (Size, Color), not map order.
        assert_eq!(
            line_key(product.id, &product.variants, Some(&selection)),
            "7-Large-Red"
        );
        assert_eq!(line_key(product.id, &product.variants, None), "7");
    }

    #[test]
    fn distinct_selections_occupy_distinct_lines() {
        let product = product_with_sizes();
        let mut bill = BillStore::new();

        let small = BTreeMap::from([
            ("Size".to_string(), "Small".to_string()),
            ("Color".to_string(), "Red".to_string()),
        ]);
        let large = BTreeMap::from([
            ("Size".to_string(), "Large".to_string()),
            ("Color".to_string(), "Red".to_string()),
        ]);

        bill.add(&product, Some(small.clone()));
        bill.add(&product, Some(large));
        bill.add(&product, Some(small));

        assert_eq!(bill.lines().len(), 2);
        assert_eq!(bill.lines()[0].quantity, 2);
        assert_eq!(bill.lines()[0].unit_price, dec!(50));
        assert_eq!(bill.lines()[1].quantity, 1);
        assert_eq!(bill.lines()[1].unit_price, dec!(90));
    }

    #[test]
    fn operator_price_override_drives_the_line_total() {
        let product = product_with_sizes();
        let mut bill = BillStore::new();

        let selection = BTreeMap::from([
            ("Size".to_string(), "Large".to_string()),
            ("Color".to_string(), "Blue".to_string()),
        ]);
        bill.add(&product, Some(selection));

        let key = bill.lines()[0].key.clone();
        bill.set_quantity(&key, 3);
        bill.set_custom_price(&key, dec!(80));

        assert_eq!(bill.lines()[0].effective_price(), dec!(80));
        assert_eq!(bill.total(), dec!(240));
    }

    #[test]
    fn removing_a_line_by_key() {
        let product = product_with_sizes();
        let mut bill = BillStore::new();
        bill.add(&product, None);

        let key = bill.lines()[0].key.clone();
        bill.remove(&key);
        assert!(bill.lines().is_empty());
        assert_eq!(bill.total(), Decimal::ZERO);
    }
}
