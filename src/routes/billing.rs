use axum::{Json, extract::State};
use rust_decimal::Decimal;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{BillRequest, NewOrder, Order, OrderLine},
    queries::{order_queries, product_queries},
};

use super::orders::resolve_line_price;

/// Point-of-sale bill: the operator's lines become a completed order. Prices
/// are re-resolved server-side; a hand-entered price per line wins.
pub async fn create_bill(
    State(state): State<AppState>,
    Json(payload): Json<BillRequest>,
) -> Result<Json<Order>> {
    if payload.lines.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".to_string()));
    }

    if payload.customer_name.trim().is_empty() {
        return Err(AppError::BadRequest("Enter customer name".to_string()));
    }

    for line in &payload.lines {
        if line.quantity <= 0 {
            return Err(AppError::BadRequest(format!(
                "Invalid quantity for product {}",
                line.product_id
            )));
        }
    }

    let requested_ids: Vec<i32> = payload.lines.iter().map(|line| line.product_id).collect();
    let products = product_queries::find_by_ids(&state.db, &requested_ids).await?;

    let mut total_amount = Decimal::ZERO;
    let mut order_lines = Vec::with_capacity(payload.lines.len());

    for line in &payload.lines {
        let product = products.get(&line.product_id).ok_or_else(|| {
            AppError::NotFound(format!("Product {} not found", line.product_id))
        })?;

        let price = resolve_line_price(product, line.selected_variants.as_ref(), line.custom_price)?;
        total_amount += price * Decimal::from(line.quantity);

        order_lines.push(OrderLine {
            id: product.id,
            name: product.name.clone(),
            quantity: line.quantity,
            price,
            variants: line.selected_variants.clone(),
        });
    }

    let order = order_queries::create_order(
        &state.db,
        &NewOrder {
            customer_name: payload.customer_name.clone(),
            customer_mobile: payload.customer_mobile.clone().unwrap_or_default(),
            customer_address: payload
                .customer_address
                .clone()
                .unwrap_or_else(|| "Store Walk-in".to_string()),
            items: order_lines,
            total_amount,
            status: "completed".to_string(),
            source: "pos".to_string(),
        },
    )
    .await?;

    tracing::info!("POS bill {} created for {}", order.id, order.customer_name);

    Ok(Json(order))
}
