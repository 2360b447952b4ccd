//! Collection - typed accessor for one record type.

use std::marker::PhantomData;

use serde_json::Value;
use tracing::warn;

use super::Record;
use crate::error::StoreError;
use crate::medium::Medium;
use crate::store::{Document, Store};

/// Typed wrapper around the store's JSON operations for records of type `R`.
pub struct Collection<'a, M, R> {
    store: &'a Store<M>,
    _marker: PhantomData<R>,
}

impl<'a, M: Medium, R: Record> Collection<'a, M, R> {
    pub fn new(store: &'a Store<M>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// All records that decode as `R`.
    pub fn get_all(&self) -> Vec<R> {
        decode_all(self.store.get_all(R::COLLECTION))
    }

    /// Get a record by id.
    pub fn get(&self, id: &str) -> Option<R> {
        self.store
            .get_by_id(R::COLLECTION, id)
            .and_then(decode)
    }

    /// Add a record. An empty id is replaced with a generated one.
    pub fn add(&self, record: &R) -> Result<R, StoreError> {
        let doc = encode(record)?;
        let stored = self.store.add(R::COLLECTION, doc)?;
        Ok(serde_json::from_value(Value::Object(stored))?)
    }

    /// Add `record` only if `accept` approves the records already stored.
    ///
    /// The check and the insert happen under one write lock, so two callers
    /// cannot both pass the same check.
    pub(crate) fn add_if<F>(&self, record: &R, accept: F) -> Result<Option<R>, StoreError>
    where
        F: FnOnce(&[R]) -> bool,
    {
        let doc = encode(record)?;
        let stored = self.store.add_if(R::COLLECTION, doc, |docs| {
            let existing: Vec<R> = docs.iter().cloned().filter_map(decode).collect();
            accept(&existing)
        })?;
        match stored {
            Some(doc) => Ok(Some(serde_json::from_value(Value::Object(doc))?)),
            None => Ok(None),
        }
    }

    /// Shallow-merge `patch` (a JSON object) into the record with `id`.
    ///
    /// Fails without writing if the merged record no longer decodes as `R`.
    pub fn update(&self, id: &str, patch: Value) -> Result<Option<R>, StoreError> {
        let Value::Object(patch) = patch else {
            return Err(StoreError::InvalidRecord {
                collection: R::COLLECTION.to_string(),
                reason: "patch must be a JSON object".to_string(),
            });
        };

        let merged = self.store.update_checked(R::COLLECTION, id, patch, |merged| {
            serde_json::from_value::<R>(Value::Object(merged.clone()))
                .map(|_| ())
                .map_err(|e| StoreError::InvalidRecord {
                    collection: R::COLLECTION.to_string(),
                    reason: e.to_string(),
                })
        })?;

        match merged {
            Some(doc) => Ok(Some(serde_json::from_value(Value::Object(doc))?)),
            None => Ok(None),
        }
    }

    /// Delete a record by id. Returns true if it existed.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        self.store.remove(R::COLLECTION, id)
    }

    /// Find records matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> Vec<R>
    where
        F: Fn(&R) -> bool,
    {
        self.get_all().into_iter().filter(|r| predicate(r)).collect()
    }

    /// Case-insensitive text search over the records' string fields.
    pub fn search(&self, text: &str) -> Vec<R> {
        decode_all(self.store.search(R::COLLECTION, text))
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.clear(R::COLLECTION)
    }

    pub fn count(&self) -> usize {
        self.get_all().len()
    }

    /// Write `records` as the initial contents if the collection does not exist yet.
    pub fn seed(&self, records: &[R]) -> Result<usize, StoreError> {
        let docs = records.iter().map(encode).collect::<Result<Vec<_>, _>>()?;
        self.store.seed(R::COLLECTION, docs)
    }
}

fn encode<R: Record>(record: &R) -> Result<Document, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(doc) => Ok(doc),
        other => Err(StoreError::InvalidRecord {
            collection: R::COLLECTION.to_string(),
            reason: format!("expected a JSON object, got {}", other),
        }),
    }
}

fn decode<R: Record>(doc: Document) -> Option<R> {
    match serde_json::from_value(Value::Object(doc)) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(collection = R::COLLECTION, error = %e, "skipping record that does not decode");
            None
        }
    }
}

fn decode_all<R: Record>(docs: Vec<Document>) -> Vec<R> {
    docs.into_iter().filter_map(decode).collect()
}
