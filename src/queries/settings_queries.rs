use sqlx::PgPool;

use crate::{
    error::Result,
    models::{SiteSettings, SiteSettingsRequest},
};

/// The settings table holds one row (id = 1); a missing row falls back to
/// defaults rather than erroring.
pub async fn get_settings(pool: &PgPool) -> Result<SiteSettings> {
    let settings =
        sqlx::query_as::<_, SiteSettings>("SELECT * FROM site_settings WHERE id = 1")
            .fetch_optional(pool)
            .await?;

    Ok(settings.unwrap_or_default())
}

pub async fn update_settings(pool: &PgPool, req: &SiteSettingsRequest) -> Result<SiteSettings> {
    let settings = sqlx::query_as::<_, SiteSettings>(
        r#"
        INSERT INTO site_settings (id, background_url, hero_text, sub_text)
        VALUES (1, COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, ''))
        ON CONFLICT (id) DO UPDATE
        SET
            background_url = COALESCE($1, site_settings.background_url),
            hero_text = COALESCE($2, site_settings.hero_text),
            sub_text = COALESCE($3, site_settings.sub_text)
        RETURNING *
        "#,
    )
    .bind(&req.background_url)
    .bind(&req.hero_text)
    .bind(&req.sub_text)
    .fetch_one(pool)
    .await?;

    Ok(settings)
}
