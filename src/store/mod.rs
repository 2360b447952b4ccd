//! Store - JSON collections persisted through a [`Medium`].
//!
//! Each collection lives under one medium key as a serialized JSON array of
//! objects. Every operation re-reads the whole collection; every write
//! serializes the whole collection back.
//!
//! Reads never fail: a missing key, an unreadable medium or text that does
//! not parse all look like an empty collection (the failure is logged).
//! Writes propagate medium and serialization errors to the caller.
//!
//! ## Example
//!
//! ```ignore
//! use serde_json::json;
//! use storefront_db::{InMemoryMedium, Store};
//!
//! let store = Store::open(InMemoryMedium::new())?;
//! let product = store.add("products", json!({"name": "X", "price": 100}).as_object().unwrap().clone())?;
//! let loaded = store.get_by_id("products", product["id"].as_str().unwrap());
//! ```

mod change;
mod entry;
mod merge;
mod query;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::collection::{Collection, Record};
use crate::error::{MediumError, StoreError};
use crate::medium::Medium;

pub use change::{ChangeKind, StoreChange};
use query::{ensure_id, matches_id};

#[cfg(feature = "emitter")]
use crate::emitter::ChangeNotifier;

/// One record: a JSON object.
pub type Document = serde_json::Map<String, Value>;

/// Collection store over a single medium.
pub struct Store<M> {
    medium: M,
    open: AtomicBool,
    write_lock: Mutex<()>,
    #[cfg(feature = "emitter")]
    notifier: ChangeNotifier,
}

impl<M: Medium> Store<M> {
    /// Open the medium and wrap it in a store.
    pub fn open(medium: M) -> Result<Self, StoreError> {
        medium.open()?;
        info!("store opened");
        Ok(Self {
            medium,
            open: AtomicBool::new(true),
            write_lock: Mutex::new(()),
            #[cfg(feature = "emitter")]
            notifier: ChangeNotifier::new(),
        })
    }

    /// Close the store. Later writes fail with [`StoreError::Closed`] and
    /// later reads come back empty. Closing twice is a no-op.
    pub fn close(&self) -> Result<(), StoreError> {
        if self.open.swap(false, Ordering::SeqCst) {
            self.medium.close()?;
            info!("store closed");
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// The underlying medium.
    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Typed access to the collection backing `R`.
    pub fn collection<R: Record>(&self) -> Collection<'_, M, R> {
        Collection::new(self)
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Every record in `collection`, in insertion order.
    pub fn get_all(&self, collection: &str) -> Vec<Document> {
        self.load(collection)
    }

    /// The first record whose id equals `id`.
    pub fn get_by_id(&self, collection: &str, id: &str) -> Option<Document> {
        self.load(collection)
            .into_iter()
            .find(|doc| matches_id(doc, id))
    }

    /// Records for which `predicate` returns true.
    pub fn filter<F>(&self, collection: &str, predicate: F) -> Vec<Document>
    where
        F: Fn(&Document) -> bool,
    {
        self.load(collection)
            .into_iter()
            .filter(|doc| predicate(doc))
            .collect()
    }

    /// Case-insensitive substring search over every string field of every
    /// record. An empty query returns all records.
    pub fn search(&self, collection: &str, text: &str) -> Vec<Document> {
        let needle = text.to_lowercase();
        self.load(collection)
            .into_iter()
            .filter(|doc| query::matches_text(doc, &needle))
            .collect()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.load(collection).len()
    }

    /// Keys currently present in the medium.
    pub fn collections(&self) -> Vec<String> {
        if !self.is_open() {
            warn!("keys requested from closed store");
            return Vec::new();
        }
        match self.medium.keys() {
            Ok(keys) => keys,
            Err(e) => {
                warn!(error = %e, "failed to list keys");
                Vec::new()
            }
        }
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Append `record`, assigning an id when it has none. Returns the stored record.
    ///
    /// Fails with [`StoreError::DuplicateId`] when the id is already taken.
    pub fn add(&self, collection: &str, record: Document) -> Result<Document, StoreError> {
        self.add_if(collection, record, |_| true)?
            .ok_or_else(|| StoreError::InvalidRecord {
                collection: collection.to_string(),
                reason: "record rejected".to_string(),
            })
    }

    /// `add` that first shows the current records to `accept`, under the same
    /// write lock as the insert. Returns `Ok(None)` without writing when
    /// `accept` refuses.
    pub(crate) fn add_if<F>(
        &self,
        collection: &str,
        mut record: Document,
        accept: F,
    ) -> Result<Option<Document>, StoreError>
    where
        F: FnOnce(&[Document]) -> bool,
    {
        let _guard = self.begin_write()?;
        let id = ensure_id(collection, &mut record)?;

        let mut docs = self.load(collection);
        if docs.iter().any(|doc| matches_id(doc, &id)) {
            return Err(StoreError::DuplicateId {
                collection: collection.to_string(),
                id,
            });
        }
        if !accept(&docs) {
            debug!(collection, id = %id, "add rejected");
            return Ok(None);
        }
        docs.push(record.clone());
        self.persist(collection, &docs)?;

        debug!(collection, id = %id, "record added");
        self.notify(collection, ChangeKind::Added, Some(id));
        Ok(Some(record))
    }

    /// Shallow-merge `patch` into the record with `id`.
    ///
    /// Fields in `patch` overwrite, omitted fields keep their value, and an
    /// `id` field in `patch` is ignored. Returns `Ok(None)` without writing
    /// when no record matches.
    pub fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Document,
    ) -> Result<Option<Document>, StoreError> {
        self.update_checked(collection, id, patch, |_| Ok(()))
    }

    /// `update` with a validation step on the merged record before it is written.
    pub(crate) fn update_checked<F>(
        &self,
        collection: &str,
        id: &str,
        patch: Document,
        check: F,
    ) -> Result<Option<Document>, StoreError>
    where
        F: FnOnce(&Document) -> Result<(), StoreError>,
    {
        let _guard = self.begin_write()?;

        let mut docs = self.load(collection);
        let Some(pos) = docs.iter().position(|doc| matches_id(doc, id)) else {
            debug!(collection, id, "update skipped, no such record");
            return Ok(None);
        };

        let merged = merge::shallow_merge(&docs[pos], patch);
        check(&merged)?;
        docs[pos] = merged.clone();
        self.persist(collection, &docs)?;

        debug!(collection, id, "record updated");
        self.notify(collection, ChangeKind::Updated, Some(id.to_string()));
        Ok(Some(merged))
    }

    /// Remove the record with `id`. Returns false, without writing, when none matched.
    pub fn remove(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let _guard = self.begin_write()?;

        let mut docs = self.load(collection);
        let before = docs.len();
        docs.retain(|doc| !matches_id(doc, id));
        if docs.len() == before {
            debug!(collection, id, "remove skipped, no such record");
            return Ok(false);
        }
        self.persist(collection, &docs)?;

        debug!(collection, id, "record removed");
        self.notify(collection, ChangeKind::Removed, Some(id.to_string()));
        Ok(true)
    }

    /// Overwrite `collection` with an empty array.
    pub fn clear(&self, collection: &str) -> Result<(), StoreError> {
        let _guard = self.begin_write()?;
        self.persist(collection, &[])?;
        debug!(collection, "collection cleared");
        self.notify(collection, ChangeKind::Cleared, None);
        Ok(())
    }

    /// Initialise `collection` with `records` if its key is absent.
    ///
    /// Returns the number of records written; 0 when the collection already
    /// existed (even if it was empty).
    pub fn seed(&self, collection: &str, records: Vec<Document>) -> Result<usize, StoreError> {
        let _guard = self.begin_write()?;
        if self.medium.get_item(collection)?.is_some() {
            debug!(collection, "seed skipped, collection exists");
            return Ok(0);
        }

        let mut docs: Vec<Document> = Vec::with_capacity(records.len());
        for mut doc in records {
            let id = ensure_id(collection, &mut doc)?;
            if docs.iter().any(|d| matches_id(d, &id)) {
                return Err(StoreError::DuplicateId {
                    collection: collection.to_string(),
                    id,
                });
            }
            docs.push(doc);
        }
        self.persist(collection, &docs)?;

        info!(collection, count = docs.len(), "collection seeded");
        self.notify(collection, ChangeKind::Seeded, None);
        Ok(docs.len())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn begin_write(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        if !self.is_open() {
            return Err(StoreError::Closed);
        }
        let guard = self
            .write_lock
            .lock()
            .map_err(|_| MediumError::LockPoisoned("store write"))?;
        Ok(guard)
    }

    /// Raw text under `key`, with every failure logged and mapped to `None`.
    fn read_text(&self, key: &str) -> Option<String> {
        if !self.is_open() {
            warn!(key, "read from closed store");
            return None;
        }
        match self.medium.get_item(key) {
            Ok(text) => text,
            Err(e) => {
                warn!(key, error = %e, "medium read failed");
                None
            }
        }
    }

    fn load(&self, collection: &str) -> Vec<Document> {
        let Some(text) = self.read_text(collection) else {
            return Vec::new();
        };

        let items: Vec<Value> = match serde_json::from_str(&text) {
            Ok(items) => items,
            Err(e) => {
                warn!(collection, error = %e, "collection failed to parse, treating as empty");
                return Vec::new();
            }
        };

        items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(doc) => Some(doc),
                other => {
                    warn!(collection, value = %other, "skipping non-object element");
                    None
                }
            })
            .collect()
    }

    fn persist(&self, collection: &str, docs: &[Document]) -> Result<(), StoreError> {
        let text = serde_json::to_string(docs)?;
        self.medium.set_item(collection, &text)?;
        Ok(())
    }

    #[cfg(feature = "emitter")]
    fn notify(&self, collection: &str, kind: ChangeKind, id: Option<String>) {
        self.notifier.notify(StoreChange {
            collection: collection.to_string(),
            kind,
            id,
        });
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&self, _collection: &str, _kind: ChangeKind, _id: Option<String>) {}
}

#[cfg(feature = "emitter")]
impl<M: Medium> Store<M> {
    /// Register a listener for changes to `collection`.
    ///
    /// Listeners run on their own threads after the write has landed.
    pub fn on_change<F>(&self, collection: &str, listener: F)
    where
        F: Fn(StoreChange) + Send + Sync + 'static,
    {
        self.notifier.on(collection, listener);
    }

    /// Register a listener for changes to any collection or entry.
    pub fn on_any_change<F>(&self, listener: F)
    where
        F: Fn(StoreChange) + Send + Sync + 'static,
    {
        self.notifier.on(crate::emitter::ANY_COLLECTION, listener);
    }
}
