use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde_json::json;

use crate::{
    AppState,
    cart::{combinations, pricing},
    error::{AppError, Result},
    models::{CheckoutRequest, NewOrder, Order, OrderLine, Product},
    queries::{order_queries, product_queries},
    services::email_service,
};

/// Resolves the authoritative unit price for one order line. Products with
/// variant dimensions require a selection covering every dimension; the
/// combination generator's empty result is what blocks an incomplete one.
/// A hand-entered price (point-of-sale) wins over the resolved price.
pub(super) fn resolve_line_price(
    product: &Product,
    selection: Option<&BTreeMap<String, String>>,
    custom_price: Option<Decimal>,
) -> Result<Decimal> {
    let resolved = if product.variants.is_empty() {
        product.price
    } else {
        let picked = selection.ok_or_else(|| incomplete_selection(product))?;
        let selection = combinations::complete_selection(&product.variants, picked)
            .ok_or_else(|| incomplete_selection(product))?;
        pricing::resolve_price(product, &selection).price
    };

    Ok(custom_price.unwrap_or(resolved))
}

fn incomplete_selection(product: &Product) -> AppError {
    AppError::BadRequest(format!(
        "Select an option for every type of {}",
        product.name
    ))
}

pub async fn checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<Json<serde_json::Value>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }

    if payload.mobile.trim().is_empty() {
        return Err(AppError::BadRequest("Mobile number is required".to_string()));
    }

    if payload.address.trim().is_empty() {
        return Err(AppError::BadRequest("Address is required".to_string()));
    }

    if payload.items.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".to_string()));
    }

    for item in &payload.items {
        if item.quantity <= 0 {
            return Err(AppError::BadRequest(format!(
                "Invalid quantity for product {}",
                item.id
            )));
        }
    }

    // The cart carries string ids; resolve them before the batch fetch.
    let mut requested_ids = Vec::with_capacity(payload.items.len());
    for item in &payload.items {
        let id: i32 = item.id.parse().map_err(|_| {
            AppError::BadRequest(format!("Invalid product id {}", item.id))
        })?;
        requested_ids.push(id);
    }

    let products = product_queries::find_by_ids(&state.db, &requested_ids).await?;

    let mut total_amount = Decimal::ZERO;
    let mut order_lines = Vec::with_capacity(payload.items.len());

    for (item, id) in payload.items.iter().zip(&requested_ids) {
        let product = products
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;

        let price = resolve_line_price(product, item.selected_variants.as_ref(), None)?;
        total_amount += price * Decimal::from(item.quantity);

        order_lines.push(OrderLine {
            id: *id,
            name: product.name.clone(),
            quantity: item.quantity,
            price,
            variants: item.selected_variants.clone(),
        });
    }

    let order = order_queries::create_order(
        &state.db,
        &NewOrder {
            customer_name: payload.name.clone(),
            customer_mobile: payload.mobile.clone(),
            customer_address: payload.address.clone(),
            items: order_lines,
            total_amount,
            status: "pending".to_string(),
            source: "web".to_string(),
        },
    )
    .await?;

    tracing::info!("Web order {} created for {}", order.id, order.customer_name);

    // The order record survives an email failure; the caller still sees 500
    // and can retry from the cart.
    email_service::send_order_confirmation(
        &state.ses_client,
        &state.email_sender,
        &state.admin_email,
        &order,
    )
    .await?;

    Ok(Json(json!({
        "data": {
            "order_id": order.id,
            "total_amount": order.total_amount,
        }
    })))
}

pub async fn get_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = order_queries::get_all(&state.db).await?;

    Ok(Json(orders))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    let deleted = order_queries::delete_order(&state.db, id).await?;

    if deleted == 0 {
        return Err(AppError::NotFound("Order not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
