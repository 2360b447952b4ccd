//! Ad hoc single-value keys (`lastOrder`, `current_user`) that live next to
//! the collections in the same medium.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::{ChangeKind, Store};
use crate::error::StoreError;
use crate::medium::Medium;

impl<M: Medium> Store<M> {
    /// Read and decode the value under `key`. Missing or undecodable values
    /// come back as `None` (decode failures are logged).
    pub fn get_entry<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = self.read_text(key)?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "entry failed to parse");
                None
            }
        }
    }

    /// Serialize `value` under `key`, replacing any previous value.
    pub fn set_entry<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let _guard = self.begin_write()?;
        let text = serde_json::to_string(value)?;
        self.medium.set_item(key, &text)?;
        debug!(key, "entry written");
        self.notify(key, ChangeKind::Updated, None);
        Ok(())
    }

    /// Delete `key`. Returns true if it existed.
    pub fn remove_entry(&self, key: &str) -> Result<bool, StoreError> {
        let _guard = self.begin_write()?;
        let existed = self.medium.remove_item(key)?;
        if existed {
            debug!(key, "entry removed");
            self.notify(key, ChangeKind::Removed, None);
        }
        Ok(existed)
    }

    /// True when `key` holds a value that decodes as `T`.
    pub fn has_entry<T: DeserializeOwned>(&self, key: &str) -> bool {
        self.get_entry::<T>(key).is_some()
    }
}
