use sqlx::PgPool;

use crate::{
    error::Result,
    models::{NewWishlistItem, WishlistItem},
};

/// Inserts the item; returns `None` when the user already has it.
pub async fn add_item(
    pool: &PgPool,
    user_id: &str,
    item: &NewWishlistItem,
) -> Result<Option<WishlistItem>> {
    let item = sqlx::query_as::<_, WishlistItem>(
        "INSERT INTO wishlist (user_id, item_name, price, image, category)
         VALUES ($1, $2, $3, $4, $5)
         ON CONFLICT (user_id, item_name) DO NOTHING
         RETURNING *",
    )
    .bind(user_id)
    .bind(&item.item_name)
    .bind(&item.price)
    .bind(&item.image)
    .bind(&item.category)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

pub async fn remove_item(pool: &PgPool, user_id: &str, item_name: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM wishlist WHERE user_id = $1 AND item_name = $2")
        .bind(user_id)
        .bind(item_name)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn find_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<WishlistItem>> {
    let items = sqlx::query_as::<_, WishlistItem>(
        "SELECT * FROM wishlist WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(items)
}

pub async fn contains(pool: &PgPool, user_id: &str, item_name: &str) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM wishlist WHERE user_id = $1 AND item_name = $2)",
    )
    .bind(user_id)
    .bind(item_name)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}
