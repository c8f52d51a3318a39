use axum::{Json, extract::State};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{AuthResponse, GoogleAuthRequest, User},
    queries::user_queries,
    utils::{extractors::AppJson, jwt},
};

pub async fn google_auth(
    State(state): State<AppState>,
    AppJson(payload): AppJson<GoogleAuthRequest>,
) -> Result<Json<AuthResponse>> {
    let token = payload
        .token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::BadRequest("token is required".to_string()))?;

    let google_user = state.google.validate_id_token(&token).await.map_err(|e| {
        tracing::warn!("❌ Google Auth Error: {}", e);
        AppError::Unauthorized("Invalid Google token".to_string())
    })?;

    let email = google_user
        .email
        .ok_or_else(|| AppError::Unauthorized("Email not provided by Google".to_string()))?;

    let identity = User {
        id: google_user.sub,
        email,
        name: google_user.name,
        picture: google_user.picture,
    };

    let user = user_queries::upsert_user(&state.db, &identity).await?;
    let jwt = jwt::generate_token(&user, &state.auth.jwt_secret, state.auth.token_ttl_secs)?;

    tracing::info!("User {} signed in", user.id);

    Ok(Json(AuthResponse { jwt, user }))
}
