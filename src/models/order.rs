use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

// DB models

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    pub customer_mobile: String,
    pub customer_address: String,
    pub items: Json<Vec<OrderLine>>,
    pub total_amount: Decimal,
    pub status: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// One purchased line, stored verbatim in the order's JSONB payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<BTreeMap<String, String>>,
}

/// Order as assembled by checkout or point-of-sale, before it has an id.
#[derive(Debug)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_mobile: String,
    pub customer_address: String,
    pub items: Vec<OrderLine>,
    pub total_amount: Decimal,
    pub status: String,
    pub source: String,
}

// Request types

#[derive(Debug, Deserialize)]
pub struct CheckoutItem {
    /// Product id as the client cart carries it (a string).
    pub id: String,
    pub quantity: i32,
    #[serde(default)]
    pub selected_variants: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub name: String,
    pub mobile: String,
    pub address: String,
    #[serde(default)]
    pub email: Option<String>,
    pub items: Vec<CheckoutItem>,
    /// Client-computed total, kept for wire compatibility. The persisted
    /// order uses the server-side recomputation.
    #[serde(default)]
    pub total: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct BillLineRequest {
    pub product_id: i32,
    pub quantity: i32,
    #[serde(default)]
    pub selected_variants: Option<BTreeMap<String, String>>,
    /// Operator's hand-entered unit price, used instead of the resolved one.
    #[serde(default)]
    pub custom_price: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct BillRequest {
    pub customer_name: String,
    #[serde(default)]
    pub customer_mobile: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
    pub lines: Vec<BillLineRequest>,
}
