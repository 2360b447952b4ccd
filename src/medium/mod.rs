//! Medium - the synchronous key-value backend a [`Store`](crate::Store) persists into.
//!
//! A medium behaves like a browser's local storage: string keys map to
//! string values, every call is synchronous, and there is no transaction
//! spanning more than one call.
//!
//! ## Example
//!
//! ```ignore
//! use storefront_db::{InMemoryMedium, Medium};
//!
//! let medium = InMemoryMedium::with_quota(5 * 1024 * 1024);
//! medium.set_item("products", "[]")?;
//! assert_eq!(medium.get_item("products")?.as_deref(), Some("[]"));
//! ```

mod file;
mod in_memory;

use std::sync::Arc;

use crate::error::MediumError;

pub use file::FileMedium;
pub use in_memory::InMemoryMedium;

/// Abstract key-value storage.
pub trait Medium: Send + Sync {
    /// Prepare the medium for use. Called once by `Store::open`.
    fn open(&self) -> Result<(), MediumError> {
        Ok(())
    }

    /// Release the medium. Called by `Store::close`.
    fn close(&self) -> Result<(), MediumError> {
        Ok(())
    }

    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, MediumError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), MediumError>;

    /// Remove `key`. Returns true if it existed.
    fn remove_item(&self, key: &str) -> Result<bool, MediumError>;

    /// All keys currently present, in no particular order.
    fn keys(&self) -> Result<Vec<String>, MediumError>;
}

impl<T: Medium + ?Sized> Medium for Box<T> {
    fn open(&self) -> Result<(), MediumError> {
        (**self).open()
    }

    fn close(&self) -> Result<(), MediumError> {
        (**self).close()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, MediumError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), MediumError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<bool, MediumError> {
        (**self).remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>, MediumError> {
        (**self).keys()
    }
}

impl<T: Medium + ?Sized> Medium for Arc<T> {
    fn open(&self) -> Result<(), MediumError> {
        (**self).open()
    }

    fn close(&self) -> Result<(), MediumError> {
        (**self).close()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, MediumError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), MediumError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<bool, MediumError> {
        (**self).remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>, MediumError> {
        (**self).keys()
    }
}
