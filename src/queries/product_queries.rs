use std::collections::HashMap;

use sqlx::PgPool;
use sqlx::types::Json;

use crate::{
    error::Result,
    models::{Product, ProductRequest},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn find_by_ids(pool: &PgPool, ids: &[i32]) -> Result<HashMap<i32, Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(pool)
        .await?;

    Ok(products.into_iter().map(|p| (p.id, p)).collect())
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;

    Ok(products)
}

pub async fn create_product(pool: &PgPool, req: &ProductRequest) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (
            name, price, original_price, images, badge, materials,
            tagline, description, category_id, variants
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(&req.name)
    .bind(req.price)
    .bind(req.original_price)
    .bind(req.images.clone().unwrap_or_default())
    .bind(&req.badge)
    .bind(req.materials.clone().unwrap_or_default())
    .bind(&req.tagline)
    .bind(&req.description)
    .bind(req.category_id)
    .bind(Json(req.variants.clone().unwrap_or_default()))
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn update_product(pool: &PgPool, id: i32, req: &ProductRequest) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET
            name = COALESCE($1, name),
            price = COALESCE($2, price),
            original_price = COALESCE($3, original_price),
            images = COALESCE($4, images),
            badge = COALESCE($5, badge),
            materials = COALESCE($6, materials),
            tagline = COALESCE($7, tagline),
            description = COALESCE($8, description),
            category_id = COALESCE($9, category_id),
            variants = COALESCE($10, variants),
            updated_at = NOW()
        WHERE id = $11
        RETURNING *
        "#,
    )
    .bind(&req.name)
    .bind(req.price)
    .bind(req.original_price)
    .bind(&req.images)
    .bind(&req.badge)
    .bind(&req.materials)
    .bind(&req.tagline)
    .bind(&req.description)
    .bind(req.category_id)
    .bind(req.variants.as_ref().map(|v| Json(v.clone())))
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
