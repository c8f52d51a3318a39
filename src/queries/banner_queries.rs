use sqlx::PgPool;

use crate::{error::Result, models::Banner};

/// Active banners in display order; ties fall back to insertion order.
pub async fn list_active(pool: &PgPool) -> Result<Vec<Banner>> {
    let banners = sqlx::query_as::<_, Banner>(
        "SELECT * FROM banners
         WHERE is_active = TRUE
         ORDER BY position ASC, display_order ASC, id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(banners)
}
