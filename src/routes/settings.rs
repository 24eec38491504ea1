use axum::{Json, extract::State};

use crate::{AppState, error::Result, models::SiteSettings, queries::settings_queries};

pub async fn get_settings(State(state): State<AppState>) -> Result<Json<SiteSettings>> {
    let settings = settings_queries::get_settings(&state.db).await?;

    Ok(Json(settings))
}
