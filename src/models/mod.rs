mod banner;
mod cart;
mod common;
mod product;
mod user;
mod wishlist;

pub use banner::*;
pub use cart::*;
pub use common::*;
pub use product::*;
pub use user::*;
pub use wishlist::*;
