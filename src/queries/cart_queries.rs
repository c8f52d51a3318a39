use sqlx::PgPool;

use crate::{
    error::Result,
    models::{CartAddition, CartItem},
};

/// Adds to the user's line for `item_name`, creating it on first add.
///
/// Runs as a single statement against the `(user_id, item_name)` unique
/// constraint, so concurrent adds of a new item converge on one row.
pub async fn add_item(pool: &PgPool, user_id: &str, addition: &CartAddition) -> Result<CartItem> {
    let item = sqlx::query_as::<_, CartItem>(
        "INSERT INTO cart (user_id, item_name, quantity, price)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (user_id, item_name)
         DO UPDATE SET quantity = cart.quantity + EXCLUDED.quantity
         RETURNING *",
    )
    .bind(user_id)
    .bind(&addition.item_name)
    .bind(addition.quantity)
    .bind(&addition.price)
    .fetch_one(pool)
    .await?;

    Ok(item)
}

pub async fn find_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<CartItem>> {
    let items = sqlx::query_as::<_, CartItem>(
        "SELECT * FROM cart WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Sets an absolute quantity on one of the user's lines.
pub async fn set_quantity(
    pool: &PgPool,
    user_id: &str,
    item_id: i32,
    quantity: i32,
) -> Result<Option<CartItem>> {
    let item = sqlx::query_as::<_, CartItem>(
        "UPDATE cart SET quantity = $1 WHERE id = $2 AND user_id = $3 RETURNING *",
    )
    .bind(quantity)
    .bind(item_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

pub async fn remove_item(pool: &PgPool, user_id: &str, item_id: i32) -> Result<Option<CartItem>> {
    let item = sqlx::query_as::<_, CartItem>(
        "DELETE FROM cart WHERE id = $1 AND user_id = $2 RETURNING *",
    )
    .bind(item_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}
