//! Storefront records: catalogue, users, orders, reviews and the cart.
//!
//! Cross-collection links are typed ids ([`ProductId`], [`UserId`], ...)
//! resolved on demand through [`RecordRef::resolve`](crate::RecordRef::resolve).
//! Nothing enforces referential integrity; a deleted target resolves to `None`.

mod cart;
mod catalog;
mod ids;
mod orders;
mod reviews;
mod users;

pub use cart::CartItem;
pub use catalog::{Category, Product, ProductStatus};
pub use ids::{CartItemId, CategoryId, OrderId, ProductId, ReviewId, UserId};
pub use orders::{Customer, Order, OrderItem, OrderStatus, LAST_ORDER_KEY};
pub use reviews::{InvalidRating, Rating, Review};
pub use users::{Role, User};
