//! The delegating key-value store.
//!
//! A `JsObject` is an own-property map plus one optional outbound link,
//! `proto`, to the store it delegates to on lookup miss. Only own-entry
//! operations live here; chain-walking needs the heap (the link is a
//! [`Handle`]) and is implemented on [`JsHeap`](crate::JsHeap).

use std::collections::HashMap;

use core_types::{Handle, Value};

/// A delegating key-value store: the one structural type behind objects,
/// arrays-as-objects, scope records, and prototypes.
///
/// The `proto` link is a runtime, reassignable graph edge, not a type
/// relationship; it is `None` for stores at the end of a chain (the global
/// scope, a root prototype).
#[derive(Debug, Default)]
pub struct JsObject {
    properties: HashMap<String, Value>,
    /// Delegation link followed on own-property miss.
    pub proto: Option<Handle>,
}

impl JsObject {
    /// Creates an empty store with no delegation link.
    pub fn new() -> Self {
        JsObject {
            properties: HashMap::new(),
            proto: None,
        }
    }

    /// Builds a store from key/value pairs, the object-literal form.
    ///
    /// # Examples
    ///
    /// ```
    /// use object_model::JsObject;
    ///
    /// let car = JsObject::from_pairs([("model", "Mustang"), ("make", "Ford")]);
    /// assert_eq!(car.property_count(), 2);
    /// assert!(car.has_own("model"));
    /// ```
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut object = JsObject::new();
        for (key, value) in pairs {
            object.properties.insert(key.into(), value.into());
        }
        object
    }

    /// Returns the own entry for `key`, without consulting the delegate.
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Mutable variant of [`JsObject::get_own`].
    pub fn get_own_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.properties.get_mut(key)
    }

    /// Creates or overwrites an own entry.
    pub fn set_own(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Returns whether `key` is physically present on this store.
    pub fn has_own(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns the own slot for `key`, creating an empty one if absent.
    ///
    /// This is the write-through-on-miss half of subscript access; the chain
    /// search half lives on the heap.
    pub(crate) fn ensure_own(&mut self, key: &str) -> &mut Value {
        self.properties.entry(key.to_string()).or_default()
    }

    /// Removes an own entry, reporting whether it existed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.properties.remove(key).is_some()
    }

    /// Returns all own property keys.
    pub fn keys(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }

    /// Iterates over all own property values.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.properties.values()
    }

    /// Returns the number of own entries.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}
