use axum::{
    Extension, Json,
    extract::State,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{AddToCartRequest, CartItem, CartUpdateResponse, MessageResponse, UpdateCartRequest},
    queries::cart_queries,
    utils::{
        extractors::{AppJson, AppPath, acting_user_id},
        jwt::Claims,
    },
};

pub async fn add_to_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppJson(payload): AppJson<AddToCartRequest>,
) -> Result<Json<CartItem>> {
    let user_id = acting_user_id(&claims, payload.user_id.as_deref())?.to_owned();
    let addition = payload.into_addition()?;

    let item = cart_queries::add_item(&state.db, &user_id, &addition).await?;

    Ok(Json(item))
}

pub async fn get_own_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<CartItem>>> {
    let items = cart_queries::find_by_user(&state.db, &claims.sub).await?;

    Ok(Json(items))
}

pub async fn get_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppPath(user_id): AppPath<String>,
) -> Result<Json<Vec<CartItem>>> {
    let user_id = acting_user_id(&claims, Some(&user_id))?;
    let items = cart_queries::find_by_user(&state.db, user_id).await?;

    Ok(Json(items))
}

/// A quantity below one removes the line instead of storing it.
pub async fn update_quantity(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppJson(payload): AppJson<UpdateCartRequest>,
) -> Result<Json<CartUpdateResponse>> {
    let (item_id, quantity) = payload.into_parts()?;
    let not_found = || AppError::NotFound("Item not found".to_string());

    if quantity < 1 {
        let removed = cart_queries::remove_item(&state.db, &claims.sub, item_id)
            .await?
            .ok_or_else(not_found)?;

        return Ok(Json(CartUpdateResponse::Removed {
            message: "Item removed from cart".to_string(),
            removed,
        }));
    }

    let item = cart_queries::set_quantity(&state.db, &claims.sub, item_id, quantity)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(CartUpdateResponse::Updated(item)))
}

pub async fn remove_from_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppPath(item_id): AppPath<i32>,
) -> Result<Json<MessageResponse>> {
    cart_queries::remove_item(&state.db, &claims.sub, item_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Item not found".to_string()))?;

    Ok(Json(MessageResponse::new("Item removed from cart")))
}
