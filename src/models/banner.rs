use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Banner {
    pub id: i32,
    pub position: String,
    pub image_url: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub link: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
}

/// Picks the banner shown in each slot.
///
/// Input order is preserved within a position, so callers pass banners
/// already sorted by `display_order` then insertion order and the first
/// entry wins.
pub fn first_per_position(banners: Vec<Banner>) -> BTreeMap<String, Banner> {
    let mut slots = BTreeMap::new();
    for banner in banners {
        slots.entry(banner.position.clone()).or_insert(banner);
    }
    slots
}
