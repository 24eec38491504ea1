use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use uuid::Uuid;

use crate::{
    AppState,
    catalog::Catalog,
    error::{AppError, Result},
    models::{
        Category, CategoryRequest, ImageUploadUrl, ImageUrlRequest, ImageUrlResponse,
        ProductRequest, ProductResponse, SiteSettings, SiteSettingsRequest,
    },
    queries::{category_queries, product_queries, settings_queries},
    services::image_url_service::put_object_url,
};

const UPLOAD_URL_TTL_SECS: u64 = 900;

// PRODUCT ROUTES

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>> {
    if payload.name.is_none() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    if payload.price.is_none() {
        return Err(AppError::BadRequest("price is required".to_string()));
    }

    if let Some(category_id) = payload.category_id {
        if category_queries::find_by_id(&state.db, category_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Category {} does not exist",
                category_id
            )));
        }
    }

    let product = product_queries::create_product(&state.db, &payload).await?;
    let categories = category_queries::get_all(&state.db).await?;
    let category = Catalog::category_name(&categories, product.category_id);

    Ok(Json(ProductResponse { product, category }))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductResponse>> {
    if product_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Product with id {} not found",
            id
        )));
    }

    if let Some(category_id) = payload.category_id {
        if category_queries::find_by_id(&state.db, category_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Category {} does not exist",
                category_id
            )));
        }
    }

    let product = product_queries::update_product(&state.db, id, &payload).await?;
    let categories = category_queries::get_all(&state.db).await?;
    let category = Catalog::category_name(&categories, product.category_id);

    Ok(Json(ProductResponse { product, category }))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    if product_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    product_queries::delete_product(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// CATEGORY ROUTES

pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<Category>> {
    if payload.name.is_none() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    let category = category_queries::create_category(&state.db, &payload).await?;

    Ok(Json(category))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<Category>> {
    if category_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Category with id {} not found",
            id
        )));
    }

    let category = category_queries::update_category(&state.db, id, &payload).await?;

    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    if category_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound("Category not found".to_string()));
    }

    category_queries::delete_category(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// SETTINGS

pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<SiteSettingsRequest>,
) -> Result<Json<SiteSettings>> {
    let settings = settings_queries::update_settings(&state.db, &payload).await?;

    Ok(Json(settings))
}

// IMAGE UPLOADS

pub async fn generate_upload_urls(
    State(state): State<AppState>,
    Json(payload): Json<ImageUrlRequest>,
) -> Result<Json<ImageUrlResponse>> {
    match payload.folder.as_str() {
        "products" | "categories" => {}
        _ => {
            return Err(AppError::BadRequest(format!(
                "Unknown upload folder {}",
                payload.folder
            )));
        }
    }

    let mut images = Vec::with_capacity(payload.images.len());

    for req in &payload.images {
        let image_uuid = Uuid::new_v4();
        let extension = match req.content_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            _ => "jpg",
        };

        let key = format!("{}/{}.{}", payload.folder, image_uuid, extension);

        let upload_url = put_object_url(
            &state.s3_client,
            &state.s3_bucket,
            &key,
            &req.content_type,
            UPLOAD_URL_TTL_SECS,
        )
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to presign upload URL: {}", e)))?;

        images.push(ImageUploadUrl {
            image_uuid,
            upload_url,
            public_url: format!("{}/{}", state.assets_url, key),
        });
    }

    Ok(Json(ImageUrlResponse { images }))
}
