use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub image: String,
    pub category: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub image: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug)]
pub struct NewProduct {
    pub name: String,
    pub price: i32,
    pub image: String,
    pub category: String,
}

impl ProductRequest {
    /// Every field is required when creating a product.
    pub fn into_new_product(self) -> Result<NewProduct> {
        let missing = || AppError::BadRequest("Missing required fields".to_string());

        let name = self.name.filter(|s| !s.trim().is_empty()).ok_or_else(missing)?;
        let image = self.image.filter(|s| !s.trim().is_empty()).ok_or_else(missing)?;
        let category = self
            .category
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(missing)?;
        let price = self.price.ok_or_else(missing)?;

        if price <= 0 {
            return Err(AppError::BadRequest("price must be positive".to_string()));
        }

        Ok(NewProduct {
            name,
            price,
            image,
            category,
        })
    }

    /// Checks the fields an update would write; absent fields are left alone.
    pub fn validate_update(&self) -> Result<()> {
        if self.price.is_some_and(|price| price <= 0) {
            return Err(AppError::BadRequest("price must be positive".to_string()));
        }

        let blank = [&self.name, &self.image, &self.category]
            .into_iter()
            .flatten()
            .any(|value| value.trim().is_empty());

        if blank {
            return Err(AppError::BadRequest("fields cannot be empty".to_string()));
        }

        Ok(())
    }
}
