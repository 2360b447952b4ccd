//! Typed collections over the JSON store.
//!
//! ## Example
//!
//! ```ignore
//! use storefront_db::{InMemoryMedium, Record, Store};
//!
//! #[derive(Serialize, Deserialize, Clone, Record)]
//! #[record(collection = "products")]
//! struct Product {
//!     #[serde(default)]
//!     pub id: String,
//!     pub name: String,
//! }
//!
//! let store = Store::open(InMemoryMedium::new())?;
//! let saved = store.collection::<Product>().add(&product)?;
//! let loaded = store.collection::<Product>().get(saved.id());
//! ```

mod repository;

use serde::{de::DeserializeOwned, Serialize};

use crate::medium::Medium;
use crate::store::Store;

pub use repository::Collection;

/// Trait for types stored as records of a collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Medium key of the collection (e.g. "products", "orders").
    const COLLECTION: &'static str;

    /// The record id; empty until the record has been added.
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

/// A typed soft reference to a record in another collection.
///
/// Nothing keeps the target alive, so resolution can come back empty.
pub trait RecordRef: AsRef<str> {
    type Target: Record;

    fn resolve<M: Medium>(&self, store: &Store<M>) -> Option<Self::Target> {
        store.collection::<Self::Target>().get(self.as_ref())
    }
}
