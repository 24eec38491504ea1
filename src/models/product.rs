use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub images: Vec<String>,
    pub badge: Option<String>,
    pub materials: Vec<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub variants: Json<Vec<VariantDimension>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One axis of customization, e.g. Size with options S/M/L.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantDimension {
    #[serde(rename = "type")]
    pub kind: String,
    pub options: Vec<VariantOption>,
}

/// Options are stored either as a bare label or as a label with absolute
/// price overrides, so both shapes must round-trip through the JSONB column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantOption {
    Label(String),
    Priced(PricedOption),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedOption {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
}

impl VariantOption {
    pub fn label(&self) -> &str {
        match self {
            VariantOption::Label(label) => label,
            VariantOption::Priced(option) => &option.label,
        }
    }

    pub fn price_override(&self) -> Option<Decimal> {
        match self {
            VariantOption::Label(_) => None,
            VariantOption::Priced(option) => option.price,
        }
    }

    pub fn original_price_override(&self) -> Option<Decimal> {
        match self {
            VariantOption::Label(_) => None,
            VariantOption::Priced(option) => option.original_price,
        }
    }
}

impl VariantDimension {
    pub fn find_option(&self, label: &str) -> Option<&VariantOption> {
        self.options.iter().find(|option| option.label() == label)
    }
}

// Request/response types

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub original_price: Option<Decimal>,
    pub images: Option<Vec<String>>,
    pub badge: Option<String>,
    pub materials: Option<Vec<String>>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub variants: Option<Vec<VariantDimension>>,
}

/// Product as the storefront sees it: the row plus the category display
/// name resolved from `category_id` at fetch time.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn variant_option_parses_bare_label() {
        let option: VariantOption = serde_json::from_str("\"Small\"").unwrap();
        assert_eq!(option.label(), "Small");
        assert_eq!(option.price_override(), None);
    }

    #[test]
    fn variant_option_parses_structured_value() {
        let option: VariantOption =
            serde_json::from_str(r#"{"label": "Large", "price": "150", "original_price": "200"}"#)
                .unwrap();
        assert_eq!(option.label(), "Large");
        assert_eq!(option.price_override(), Some(dec!(150)));
        assert_eq!(option.original_price_override(), Some(dec!(200)));
    }

    #[test]
    fn dimension_round_trips_mixed_options() {
        let json = r#"{"type": "Size", "options": ["S", {"label": "M", "price": "150"}]}"#;
        let dimension: VariantDimension = serde_json::from_str(json).unwrap();
        assert_eq!(dimension.kind, "Size");
        assert_eq!(dimension.options.len(), 2);

        let back = serde_json::to_value(&dimension).unwrap();
        assert_eq!(back["options"][0], "S");
        assert_eq!(back["options"][1]["label"], "M");
    }
}
