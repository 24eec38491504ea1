use serde::{Deserialize, Serialize};

/// Singleton row (id = 1) backing the home page.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SiteSettings {
    pub id: i32,
    pub background_url: String,
    pub hero_text: String,
    pub sub_text: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: 1,
            background_url: String::new(),
            hero_text: String::new(),
            sub_text: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SiteSettingsRequest {
    pub background_url: Option<String>,
    pub hero_text: Option<String>,
    pub sub_text: Option<String>,
}
