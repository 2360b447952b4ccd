//! Change notifications for store writes.
//!
//! Wraps an [`EventEmitter`] so that every successful write fans out a
//! [`StoreChange`] to listeners registered for the written collection and to
//! catch-all listeners. Delivery happens on listener threads, after the write.
//!
//! ```ignore
//! store.on_change("orders", |change| {
//!     println!("{:?} {:?}", change.kind, change.id);
//! });
//! ```

use std::sync::Mutex;

use event_emitter_rs::EventEmitter;
use tracing::warn;

use crate::store::StoreChange;

/// Event name that receives every change.
pub(crate) const ANY_COLLECTION: &str = "*";

pub(crate) struct ChangeNotifier {
    emitter: Mutex<EventEmitter>,
}

impl ChangeNotifier {
    pub(crate) fn new() -> Self {
        Self {
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    /// Register a listener for `event` (a collection name or [`ANY_COLLECTION`]).
    pub(crate) fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(StoreChange) + Send + Sync + 'static,
    {
        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.on(event, listener);
            }
            Err(_) => warn!(event, "change emitter poisoned, listener dropped"),
        }
    }

    /// Deliver `change` to the collection's listeners and the catch-all ones.
    pub(crate) fn notify(&self, change: StoreChange) {
        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.emit(&change.collection, change.clone());
                emitter.emit(ANY_COLLECTION, change);
            }
            Err(_) => warn!(collection = %change.collection, "change emitter poisoned, change dropped"),
        }
    }
}
