//! Pluggable ownership of interactive widget state.
//!
//! Checkbox toggles, dropdown selections and text-field edits outlive any
//! single render pass, but the interpreter rebuilds widgets from scratch on
//! every pass. A [`StateStore`] is the collaborator that decides what
//! survives: builders *seed* initial values through it, hosts write changes
//! back into it, and the next pass picks the stored values up again.
//!
//! Nodes opt in with an explicit `id` field; a node without one always
//! rebuilds from its config.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A key/value store for interactive widget state, keyed by node `id`.
pub trait StateStore: Send + Sync {
    /// Returns the stored value for `key`, if this store persists one.
    fn get(&self, key: &str) -> Option<Value>;

    /// Records `value` under `key`. Hosts call this from change callbacks;
    /// builders only write through [`StateStore::seed`].
    fn set(&self, key: &str, value: Value);

    /// The value a widget should build with: the stored value when one
    /// exists, otherwise `initial`, which is recorded for later passes.
    fn seed(&self, key: &str, initial: Value) -> Value {
        match self.get(key) {
            Some(stored) => stored,
            None => {
                self.set(key, initial.clone());
                initial
            }
        }
    }
}

/// Sharing a store between the interpreter and the host is just cloning an
/// `Arc` around it.
impl<S: StateStore + ?Sized> StateStore for Arc<S> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) {
        (**self).set(key, value)
    }
}

/// A store that persists nothing.
///
/// Every pass re-derives interactive state from the config, matching hosts
/// that treat the document as the single source of truth. This is the
/// interpreter's default store.
#[derive(Debug, Default, Clone, Copy)]
pub struct EphemeralStateStore;

impl EphemeralStateStore {
    pub fn new() -> Self {
        Self
    }
}

impl StateStore for EphemeralStateStore {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn set(&self, _key: &str, _value: Value) {}
}

/// An in-memory store backed by a `RwLock<HashMap>`.
///
/// State written by the host survives across render passes for the lifetime
/// of the store. Works in any environment; suitable for tests and demos as
/// well as real hosts.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    values: RwLock<HashMap<String, Value>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> Option<Value> {
        match self.values.read() {
            Ok(values) => values.get(key).cloned(),
            Err(_) => {
                log::warn!("state store lock poisoned, reading nothing for '{}'", key);
                None
            }
        }
    }

    fn set(&self, key: &str, value: Value) {
        match self.values.write() {
            Ok(mut values) => {
                values.insert(key.to_string(), value);
            }
            Err(_) => log::warn!("state store lock poisoned, dropping write for '{}'", key),
        }
    }
}
