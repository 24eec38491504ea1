use sqlx::PgPool;
use sqlx::types::Json;

use crate::{
    error::Result,
    models::{NewOrder, Order},
};

pub async fn create_order(pool: &PgPool, order: &NewOrder) -> Result<Order> {
    let created = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (
            customer_name, customer_mobile, customer_address,
            items, total_amount, status, source
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&order.customer_name)
    .bind(&order.customer_mobile)
    .bind(&order.customer_address)
    .bind(Json(&order.items))
    .bind(order.total_amount)
    .bind(&order.status)
    .bind(&order.source)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

pub async fn get_all(pool: &PgPool) -> Result<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY created_at DESC")
        .fetch_all(pool)
        .await?;

    Ok(orders)
}

pub async fn delete_order(pool: &PgPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
