use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::{
    AppState,
    catalog::Catalog,
    error::{AppError, Result},
    models::ProductResponse,
    queries::{category_queries, product_queries},
};

#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub category: Option<String>,
}

pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductResponse>>> {
    let products = product_queries::get_all(&state.db).await?;
    let categories = category_queries::get_all(&state.db).await?;

    let catalog = Catalog::new(products, categories);
    let mut products = catalog.display_products();

    if let Some(ref category) = params.category {
        products.retain(|p| p.category.as_deref() == Some(category.as_str()));
    }

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let categories = category_queries::get_all(&state.db).await?;
    let category = Catalog::category_name(&categories, product.category_id);

    Ok(Json(ProductResponse { product, category }))
}
