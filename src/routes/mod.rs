mod admin;
mod billing;
mod categories;
mod health;
mod orders;
mod products;
mod settings;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/products", get(products::get_products))
        .route("/products/{id}", get(products::get_product))
        .route("/categories", get(categories::get_categories))
        .route("/settings", get(settings::get_settings))
        .route("/api/checkout", post(orders::checkout))
        .route("/admin/products", post(admin::create_product))
        .route(
            "/admin/products/{id}",
            put(admin::update_product).delete(admin::delete_product),
        )
        .route("/admin/categories", post(admin::create_category))
        .route(
            "/admin/categories/{id}",
            put(admin::update_category).delete(admin::delete_category),
        )
        .route("/admin/orders", get(orders::get_orders))
        .route("/admin/orders/{id}", delete(orders::delete_order))
        .route("/admin/settings", put(admin::update_settings))
        .route("/admin/images", post(admin::generate_upload_urls))
        .route("/admin/billing", post(billing::create_bill))
}
