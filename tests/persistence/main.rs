//! The file medium across store lifetimes, and last-write-wins between handles.

use serde_json::json;
use storefront_db::domain::Product;
use storefront_db::{Backend, FileMedium, InMemoryMedium, Medium, Store, StoreConfig};
use tempfile::tempdir;

#[test]
fn records_survive_reopen() {
    let dir = tempdir().unwrap();

    let id = {
        let store = Store::open(FileMedium::new(dir.path())).unwrap();
        let lamp = store
            .collection::<Product>()
            .add(&Product::new("Lamp", 20.0))
            .unwrap();
        store.close().unwrap();
        lamp.id
    };

    let store = Store::open(FileMedium::new(dir.path())).unwrap();
    let lamp = store.collection::<Product>().get(id.as_str()).unwrap();
    assert_eq!(lamp.name, "Lamp");
    assert_eq!(store.collections(), vec!["products".to_string()]);
}

#[test]
fn config_opens_file_backend() {
    let dir = tempdir().unwrap();
    let config = StoreConfig {
        backend: Backend::File,
        data_dir: Some(dir.path().join("db")),
        ..StoreConfig::default()
    };
    let store = config.open().unwrap();
    store
        .add("orders", json!({"id": "o1"}).as_object().cloned().unwrap())
        .unwrap();
    assert!(dir.path().join("db").join("orders.json").exists());
}

#[test]
fn stale_snapshot_write_is_last_write_wins() {
    // Two handles on one medium, like two tabs on one origin.
    let medium = InMemoryMedium::new();
    let tab_a = Store::open(medium.clone()).unwrap();
    let tab_b = Store::open(medium).unwrap();

    tab_a
        .add("cart", json!({"id": "a"}).as_object().cloned().unwrap())
        .unwrap();
    let mut stale = tab_b.get_all("cart");

    tab_a
        .add("cart", json!({"id": "b"}).as_object().cloned().unwrap())
        .unwrap();

    // tab B writes back the full array it computed from its stale read
    stale.push(json!({"id": "c"}).as_object().cloned().unwrap());
    tab_b
        .medium()
        .set_item("cart", &serde_json::to_string(&stale).unwrap())
        .unwrap();

    let ids: Vec<_> = tab_a
        .get_all("cart")
        .iter()
        .map(|d| d["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["a", "c"]);
}
