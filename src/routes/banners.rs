use std::collections::BTreeMap;

use axum::{Json, extract::State};

use crate::{
    AppState,
    error::Result,
    models::{Banner, first_per_position},
    queries::banner_queries,
};

pub async fn list_banners(State(state): State<AppState>) -> Result<Json<Vec<Banner>>> {
    let banners = banner_queries::list_active(&state.db).await?;

    Ok(Json(banners))
}

pub async fn banners_by_position(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Banner>>> {
    let banners = banner_queries::list_active(&state.db).await?;

    Ok(Json(first_per_position(banners)))
}
