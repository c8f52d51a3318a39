mod banners;
mod cart;
mod google_auth;
mod health;
mod products;
mod profile;
mod wishlist;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{
    AppState,
    middleware::{admin_middleware, auth_middleware},
};

pub fn create_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/auth/google", post(google_auth::google_auth))
        .route("/products", get(products::list_products))
        .route(
            "/products/category/{category}",
            get(products::list_by_category),
        )
        .route("/banners", get(banners::list_banners))
        .route("/banners/by-position", get(banners::banners_by_position));

    let protected = Router::new()
        .route("/profile", get(profile::get_profile))
        .route("/cart", get(cart::get_own_cart))
        .route("/cart/add", post(cart::add_to_cart))
        .route("/cart/update", put(cart::update_quantity))
        .route("/cart/remove/{item_id}", delete(cart::remove_from_cart))
        .route("/cart/{user_id}", get(cart::get_cart))
        .route("/wishlist", get(wishlist::get_own_wishlist))
        .route("/wishlist/add", post(wishlist::add_to_wishlist))
        .route("/wishlist/remove", delete(wishlist::remove_from_wishlist))
        .route("/wishlist/{user_id}", get(wishlist::get_wishlist))
        .route(
            "/wishlist/{user_id}/{item_name}",
            get(wishlist::check_wishlist),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let admin = Router::new()
        .route("/products/add", post(products::create_product))
        .route("/products/update/{id}", put(products::update_product))
        .route("/products/delete/{id}", delete(products::delete_product))
        .route_layer(middleware::from_fn_with_state(state, admin_middleware));

    Router::new().merge(public).merge(protected).merge(admin)
}
