use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Category, CategoryRequest},
};

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Category>> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;

    Ok(categories)
}

pub async fn create_category(pool: &PgPool, req: &CategoryRequest) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name, image) VALUES ($1, $2) RETURNING *",
    )
    .bind(&req.name)
    .bind(req.image.clone().unwrap_or_default())
    .fetch_one(pool)
    .await?;

    Ok(category)
}

pub async fn update_category(pool: &PgPool, id: i32, req: &CategoryRequest) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
        r#"
        UPDATE categories
        SET
            name = COALESCE($1, name),
            image = COALESCE($2, image),
            updated_at = NOW()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(&req.name)
    .bind(&req.image)
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(category)
}

pub async fn delete_category(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
