//! Local persistent collection store for storefront data.
//!
//! Collections of JSON records (products, categories, users, orders,
//! reviews, cart) are kept as one serialized array per key in a
//! synchronous key-value [`Medium`]. On top of the untyped [`Store`] sit
//! typed [`Collection`]s, the storefront [`domain`] records with soft
//! references between them, and [`Sessions`] for the signed-in user.

// Lets `#[derive(Record)]` expand to `::storefront_db::Record` inside this crate too.
extern crate self as storefront_db;

mod collection;
pub mod config;
pub mod domain;
#[cfg(feature = "emitter")]
mod emitter;
mod error;
mod id;
pub mod logging;
mod medium;
mod session;
mod store;

pub use collection::{Collection, Record, RecordRef};
pub use config::{Backend, ConfigError, StoreConfig};
pub use error::{MediumError, StoreError};
pub use id::{generate_id, generate_id_with};
pub use medium::{FileMedium, InMemoryMedium, Medium};
pub use session::{
    hash_password, hash_password_with_salt, verify_password, AuthError, NewUser, Session, Sessions,
    SESSION_KEY,
};
pub use store::{ChangeKind, Document, Store, StoreChange};

// Derive macro for `Record`, shares the trait's name like serde's derives.
pub use storefront_db_macros::Record;
