pub mod banner_queries;
pub mod cart_queries;
pub mod product_queries;
pub mod user_queries;
pub mod wishlist_queries;
