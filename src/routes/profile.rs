use axum::{Extension, Json, extract::State};

use crate::{
    AppState,
    error::Result,
    models::{ProfileResponse, User},
    queries::user_queries,
    utils::jwt::Claims,
};

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<ProfileResponse>> {
    let user = match user_queries::find_by_id(&state.db, &claims.sub).await? {
        Some(user) => user,
        None => User::from(&claims),
    };

    Ok(Json(ProfileResponse { user }))
}
