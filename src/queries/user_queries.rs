use sqlx::PgPool;

use crate::{error::Result, models::User};

/// Inserts the user or refreshes the profile fields of an existing one.
pub async fn upsert_user(pool: &PgPool, user: &User) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, email, name, picture)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (id) DO UPDATE
         SET email = EXCLUDED.email, name = EXCLUDED.name, picture = EXCLUDED.picture
         RETURNING *",
    )
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.picture)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users")))]
    async fn repeat_login_refreshes_profile(pool: PgPool) -> anyhow::Result<()> {
        let refreshed = User {
            id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            name: Some("Renamed".to_string()),
            picture: Some("https://example.com/new.png".to_string()),
        };

        let stored = upsert_user(&pool, &refreshed).await?;
        assert_eq!(stored, refreshed);

        let found = find_by_id(&pool, "u1").await?;
        assert_eq!(found, Some(refreshed));

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users")))]
    async fn first_login_creates_user(pool: PgPool) -> anyhow::Result<()> {
        let user = User {
            id: "new-sub".to_string(),
            email: "new@example.com".to_string(),
            name: None,
            picture: None,
        };

        upsert_user(&pool, &user).await?;
        assert_eq!(find_by_id(&pool, "new-sub").await?, Some(user));
        assert_eq!(find_by_id(&pool, "missing").await?, None);

        Ok(())
    }
}
