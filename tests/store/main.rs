//! Integration tests for the untyped collection store.

mod support;

use serde_json::{json, Value};
use storefront_db::{InMemoryMedium, Medium, Store, StoreError};
use support::{doc, open_store};

#[test]
fn added_record_reads_back_with_its_id() {
    let store = open_store();

    let added = store
        .add("products", doc(json!({"name": "X", "price": 100})))
        .unwrap();
    let id = added["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let loaded = store.get_by_id("products", &id).unwrap();
    assert_eq!(
        Value::Object(loaded),
        json!({"name": "X", "price": 100, "id": id})
    );
}

#[test]
fn add_and_remove_change_length_by_one() {
    let store = open_store();
    for name in ["a", "b", "c"] {
        store.add("products", doc(json!({"name": name}))).unwrap();
    }
    let before = store.get_all("products").len();

    let added = store.add("products", doc(json!({"name": "d"}))).unwrap();
    assert_eq!(store.get_all("products").len(), before + 1);

    assert!(store
        .remove("products", added["id"].as_str().unwrap())
        .unwrap());
    assert_eq!(store.get_all("products").len(), before);
}

#[test]
fn insertion_order_is_preserved() {
    let store = open_store();
    for id in ["z", "a", "m"] {
        store.add("categories", doc(json!({"id": id}))).unwrap();
    }
    let ids: Vec<_> = store
        .get_all("categories")
        .iter()
        .map(|d| d["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
}

#[test]
fn update_of_missing_user_returns_none_and_changes_nothing() {
    let store = open_store();
    store
        .add("users", doc(json!({"id": "u1", "username": "ann", "active": true})))
        .unwrap();
    let before = store.get_all("users");

    let result = store
        .update("users", "missing-id", doc(json!({"active": false})))
        .unwrap();

    assert!(result.is_none());
    assert_eq!(store.get_all("users"), before);
}

#[test]
fn update_keeps_fields_missing_from_patch() {
    let store = open_store();
    store
        .add(
            "orders",
            doc(json!({"id": "o1", "status": "pending", "total": 42.5, "items": [1, 2]})),
        )
        .unwrap();

    store
        .update("orders", "o1", doc(json!({"status": "shipped"})))
        .unwrap();

    let order = store.get_by_id("orders", "o1").unwrap();
    assert_eq!(order["status"], "shipped");
    assert_eq!(order["total"], 42.5);
    assert_eq!(order["items"], json!([1, 2]));
}

#[test]
fn collections_are_independent() {
    let store = open_store();
    store.add("products", doc(json!({"id": "same"}))).unwrap();
    store.add("reviews", doc(json!({"id": "same"}))).unwrap();

    store.clear("products").unwrap();
    assert!(store.get_all("products").is_empty());
    assert_eq!(store.get_all("reviews").len(), 1);
}

#[test]
fn corrupt_collection_reads_empty_and_next_write_replaces_it() {
    let store = open_store();
    store.medium().set_item("cart", "][").unwrap();

    assert!(store.get_all("cart").is_empty());
    assert_eq!(store.count("cart"), 0);

    store.add("cart", doc(json!({"id": "line-1"}))).unwrap();
    assert_eq!(store.get_all("cart").len(), 1);
}

#[test]
fn search_and_filter_compose_with_reads() {
    let store = open_store();
    store
        .add("products", doc(json!({"name": "Desk Lamp", "category": "Lighting", "price": 30})))
        .unwrap();
    store
        .add("products", doc(json!({"name": "Floor lamp", "category": "Lighting", "price": 90})))
        .unwrap();
    store
        .add("products", doc(json!({"name": "Stool", "category": "Seating", "price": 45})))
        .unwrap();

    assert_eq!(store.search("products", "LIGHT").len(), 2);
    assert_eq!(store.search("products", "").len(), 3);
    assert!(store.search("products", "sofa").is_empty());

    let pricey = store.filter("products", |d| d["price"].as_f64().unwrap_or(0.0) > 40.0);
    assert_eq!(pricey.len(), 2);
}

#[test]
fn quota_failure_surfaces_and_keeps_old_data() {
    let store = Store::open(InMemoryMedium::with_quota(64)).unwrap();
    store.add("products", doc(json!({"id": "p1"}))).unwrap();

    let err = store
        .add("products", doc(json!({"description": "x".repeat(128)})))
        .unwrap_err();
    assert!(matches!(err, StoreError::Medium(_)));
    assert!(err.is_quota_exceeded());
    assert_eq!(store.get_all("products").len(), 1);
}

#[test]
fn writes_after_close_fail() {
    let store = open_store();
    store.close().unwrap();
    assert!(matches!(
        store.remove("products", "p1"),
        Err(StoreError::Closed)
    ));
    assert!(matches!(
        store.set_entry("lastOrder", &json!({})),
        Err(StoreError::Closed)
    ));
}
