//! Shared helpers for the store suite.

use serde_json::Value;
use storefront_db::{Document, InMemoryMedium, Store};

pub fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

pub fn open_store() -> Store<InMemoryMedium> {
    Store::open(InMemoryMedium::new()).unwrap()
}
