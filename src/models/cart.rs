use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CartItem {
    pub id: i32,
    pub user_id: String,
    pub item_name: String,
    pub quantity: i32,
    pub price: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: Option<String>,
    pub item_name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<String>,
}

/// A validated cart addition for the acting user.
#[derive(Debug, PartialEq)]
pub struct CartAddition {
    pub item_name: String,
    pub quantity: i32,
    pub price: String,
}

impl AddToCartRequest {
    pub fn into_addition(self) -> Result<CartAddition> {
        let item_name = self
            .item_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("itemName is required".to_string()))?;

        let price = self
            .price
            .filter(|price| !price.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("price is required".to_string()))?;

        let quantity = self.quantity.unwrap_or(1);
        if quantity < 1 {
            return Err(AppError::BadRequest(
                "quantity must be at least 1".to_string(),
            ));
        }

        Ok(CartAddition {
            item_name,
            quantity,
            price,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub item_id: Option<i32>,
    pub quantity: Option<i32>,
}

impl UpdateCartRequest {
    /// Returns `(item_id, quantity)` once both are present.
    pub fn into_parts(self) -> Result<(i32, i32)> {
        match (self.item_id, self.quantity) {
            (Some(item_id), Some(quantity)) => Ok((item_id, quantity)),
            _ => Err(AppError::BadRequest("Missing required fields".to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CartUpdateResponse {
    Updated(CartItem),
    Removed { message: String, removed: CartItem },
}
