use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const DEFAULT_WISHLIST_PRICE: &str = "₹0.00";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WishlistItem {
    pub id: i32,
    pub user_id: String,
    pub item_name: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToWishlistRequest {
    pub user_id: Option<String>,
    pub item_name: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct NewWishlistItem {
    pub item_name: String,
    pub price: String,
    pub image: String,
    pub category: String,
}

impl AddToWishlistRequest {
    pub fn into_new_item(self) -> Result<NewWishlistItem> {
        let item_name = self
            .item_name
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::BadRequest("Missing required fields".to_string()))?;

        Ok(NewWishlistItem {
            item_name,
            price: self
                .price
                .filter(|price| !price.is_empty())
                .unwrap_or_else(|| DEFAULT_WISHLIST_PRICE.to_string()),
            image: self.image.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromWishlistRequest {
    pub user_id: Option<String>,
    pub item_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistStatus {
    pub is_in_wishlist: bool,
}
