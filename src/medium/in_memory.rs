//! InMemoryMedium - HashMap-backed medium for tests and embedded use.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::Medium;
use crate::error::MediumError;

/// In-memory medium backed by a HashMap.
///
/// Clone-friendly via Arc: clones share the same storage, the way two
/// browser tabs share one origin's local storage.
///
/// An optional quota bounds the total size of keys plus values, counted in
/// UTF-16 code units.
#[derive(Clone, Default)]
pub struct InMemoryMedium {
    storage: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryMedium {
    /// Create a new empty medium with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty medium that rejects writes beyond `quota` units.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            quota: Some(quota),
        }
    }

    /// Current usage in UTF-16 code units.
    pub fn used(&self) -> Result<usize, MediumError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| MediumError::LockPoisoned("usage read"))?;
        Ok(storage.iter().map(|(k, v)| entry_size(k, v)).sum())
    }

    pub fn quota(&self) -> Option<usize> {
        self.quota
    }
}

fn entry_size(key: &str, value: &str) -> usize {
    key.encode_utf16().count() + value.encode_utf16().count()
}

impl Medium for InMemoryMedium {
    fn get_item(&self, key: &str) -> Result<Option<String>, MediumError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| MediumError::LockPoisoned("read"))?;
        Ok(storage.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), MediumError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| MediumError::LockPoisoned("write"))?;

        if let Some(limit) = self.quota {
            let others: usize = storage
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| entry_size(k, v))
                .sum();
            let needed = others + entry_size(key, value);
            if needed > limit {
                return Err(MediumError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        storage.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool, MediumError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| MediumError::LockPoisoned("remove"))?;
        Ok(storage.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>, MediumError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| MediumError::LockPoisoned("keys"))?;
        Ok(storage.keys().cloned().collect())
    }
}
