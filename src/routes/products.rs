use axum::{
    Json,
    extract::State,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{MessageResponse, Product, ProductRequest},
    queries::product_queries,
    utils::extractors::{AppJson, AppPath},
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::list_all(&state.db).await?;

    Ok(Json(products))
}

pub async fn list_by_category(
    State(state): State<AppState>,
    AppPath(category): AppPath<String>,
) -> Result<Json<Vec<Product>>> {
    let products = product_queries::list_by_category(&state.db, &category).await?;

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProductRequest>,
) -> Result<Json<Product>> {
    let new_product = payload.into_new_product()?;
    let product = product_queries::create_product(&state.db, &new_product).await?;

    tracing::info!("Product {} created", product.id);

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ProductRequest>,
) -> Result<Json<Product>> {
    payload.validate_update()?;

    let product = product_queries::update_product(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>> {
    if !product_queries::delete_product(&state.db, id).await? {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
