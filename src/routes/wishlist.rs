use axum::{
    Extension, Json,
    extract::State,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        AddToWishlistRequest, MessageResponse, RemoveFromWishlistRequest, WishlistItem,
        WishlistStatus,
    },
    queries::wishlist_queries,
    utils::{
        extractors::{AppJson, AppPath, acting_user_id},
        jwt::Claims,
    },
};

pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppJson(payload): AppJson<AddToWishlistRequest>,
) -> Result<Json<WishlistItem>> {
    let user_id = acting_user_id(&claims, payload.user_id.as_deref())?.to_owned();
    let new_item = payload.into_new_item()?;

    let item = wishlist_queries::add_item(&state.db, &user_id, &new_item)
        .await?
        .ok_or_else(|| AppError::Conflict("Item already in wishlist".to_string()))?;

    Ok(Json(item))
}

pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppJson(payload): AppJson<RemoveFromWishlistRequest>,
) -> Result<Json<MessageResponse>> {
    let user_id = acting_user_id(&claims, payload.user_id.as_deref())?;
    let item_name = payload
        .item_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing required fields".to_string()))?;

    if !wishlist_queries::remove_item(&state.db, user_id, item_name).await? {
        return Err(AppError::NotFound("Item not found in wishlist".to_string()));
    }

    Ok(Json(MessageResponse::new("Item removed from wishlist")))
}

pub async fn get_own_wishlist(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<WishlistItem>>> {
    let items = wishlist_queries::find_by_user(&state.db, &claims.sub).await?;

    Ok(Json(items))
}

pub async fn get_wishlist(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppPath(user_id): AppPath<String>,
) -> Result<Json<Vec<WishlistItem>>> {
    let user_id = acting_user_id(&claims, Some(&user_id))?;
    let items = wishlist_queries::find_by_user(&state.db, user_id).await?;

    Ok(Json(items))
}

pub async fn check_wishlist(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    AppPath((user_id, item_name)): AppPath<(String, String)>,
) -> Result<Json<WishlistStatus>> {
    let user_id = acting_user_id(&claims, Some(&user_id))?;
    let is_in_wishlist = wishlist_queries::contains(&state.db, user_id, &item_name).await?;

    Ok(Json(WishlistStatus { is_in_wishlist }))
}
