use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductRequest},
};

pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

pub async fn list_by_category(pool: &PgPool, category: &str) -> Result<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE category = $1 ORDER BY id ASC")
            .bind(category)
            .fetch_all(pool)
            .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn create_product(pool: &PgPool, product: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, price, image, category)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.image)
    .bind(&product.category)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Updates the fields present in `req`; returns `None` when no product has `id`.
pub async fn update_product(
    pool: &PgPool,
    id: i32,
    req: &ProductRequest,
) -> Result<Option<Product>> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE products SET ");
    let mut fields = query.separated(", ");
    let mut has_fields = false;

    if let Some(ref name) = req.name {
        fields.push("name = ").push_bind_unseparated(name);
        has_fields = true;
    }

    if let Some(price) = req.price {
        fields.push("price = ").push_bind_unseparated(price);
        has_fields = true;
    }

    if let Some(ref image) = req.image {
        fields.push("image = ").push_bind_unseparated(image);
        has_fields = true;
    }

    if let Some(ref category) = req.category {
        fields.push("category = ").push_bind_unseparated(category);
        has_fields = true;
    }

    if !has_fields {
        return find_by_id(pool, id).await;
    }

    query.push(" WHERE id = ");
    query.push_bind(id);
    query.push(" RETURNING *");

    let product = query
        .build_query_as::<Product>()
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

pub async fn delete_product(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
