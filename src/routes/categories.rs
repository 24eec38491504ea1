use axum::{Json, extract::State};

use crate::{AppState, error::Result, models::Category, queries::category_queries};

pub async fn get_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = category_queries::get_all(&state.db).await?;

    Ok(Json(categories))
}
