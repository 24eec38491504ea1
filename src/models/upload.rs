use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ImageUrlRequest {
    /// Target bucket folder: "products" or "categories".
    pub folder: String,
    pub images: Vec<ImageUrlItem>,
}

#[derive(Debug, Deserialize)]
pub struct ImageUrlItem {
    pub content_type: String,
}

#[derive(Debug, Serialize)]
pub struct ImageUploadUrl {
    pub image_uuid: Uuid,
    pub upload_url: String,
    pub public_url: String,
}

#[derive(Debug, Serialize)]
pub struct ImageUrlResponse {
    pub images: Vec<ImageUploadUrl>,
}
