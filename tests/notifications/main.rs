//! Change notifications delivered after writes.
#![cfg(feature = "emitter")]

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use serde_json::json;
use storefront_db::{ChangeKind, InMemoryMedium, Store, StoreChange};

#[test]
fn listeners_see_writes_to_their_collection() {
    let store = Store::open(InMemoryMedium::new()).unwrap();
    let seen: Arc<Mutex<Vec<StoreChange>>> = Arc::new(Mutex::new(Vec::new()));
    let everything = Arc::new(Mutex::new(0usize));

    let sink = Arc::clone(&seen);
    store.on_change("orders", move |change| {
        sink.lock().unwrap().push(change);
    });
    let counter = Arc::clone(&everything);
    store.on_any_change(move |_| {
        *counter.lock().unwrap() += 1;
    });

    store
        .add("orders", json!({"id": "o1"}).as_object().cloned().unwrap())
        .unwrap();
    store
        .add("products", json!({"id": "p1"}).as_object().cloned().unwrap())
        .unwrap();
    // no-op writes do not notify
    assert!(!store.remove("orders", "missing").unwrap());

    // EventEmitter is async, give it time
    thread::sleep(Duration::from_millis(100));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, ChangeKind::Added);
    assert_eq!(seen[0].id.as_deref(), Some("o1"));
    assert_eq!(*everything.lock().unwrap(), 2);
}
