use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};

use crate::{
    error::{AppError, Result},
    utils::jwt::Claims,
};

/// `Json` body extractor whose rejections answer with the `{"error": ...}` shape.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// `Path` extractor whose rejections answer with the `{"error": ...}` shape.
#[derive(Debug)]
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = axum::extract::rejection::PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Returns the acting user id from the verified claims.
///
/// A user id supplied by the client (path segment or body field) is only
/// accepted when it names the same user as the session credential.
pub fn acting_user_id<'a>(claims: &'a Claims, claimed: Option<&str>) -> Result<&'a str> {
    match claimed {
        Some(id) if id != claims.sub => Err(AppError::Forbidden(
            "Cannot act on behalf of another user".to_string(),
        )),
        _ => Ok(claims.sub.as_str()),
    }
}
