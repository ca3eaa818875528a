//! Delegation-chain semantics.
//!
//! Lookup walks `proto` links until an own entry answers; writes never walk.
//! The asymmetry is the whole model: reading `o["x"]` may be answered by any
//! ancestor, while `access` materializes a slot on the receiver and `assign`
//! mutates the slot wherever the chain found it.

use core_types::{Handle, JsError, Value};

use crate::gc_integration::JsHeap;
use crate::object::JsObject;

impl JsHeap {
    /// Walks the delegation chain from `store` and returns the handle of the
    /// first store holding `key` as an own entry.
    ///
    /// The chain may be a ring (proto links are reassignable at runtime), so
    /// the walk keeps a visited list and gives up after one full loop.
    pub fn find_owner(&self, store: Handle, key: &str) -> Result<Option<Handle>, JsError> {
        let mut visited: Vec<Handle> = Vec::new();
        let mut current = Some(store);
        while let Some(handle) = current {
            if visited.contains(&handle) {
                return Ok(None);
            }
            visited.push(handle);
            let node = self.store(handle)?;
            if node.has_own(key) {
                return Ok(Some(handle));
            }
            current = node.proto;
        }
        Ok(None)
    }

    /// Reads `key` through the delegation chain.
    ///
    /// An own entry on `store` shadows any ancestor entry; a full-chain miss
    /// is `Undefined`, not a fault. Never mutates.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    /// use object_model::{JsHeap, JsObject};
    ///
    /// let mut heap = JsHeap::new();
    /// let animal = heap.alloc_object(JsObject::from_pairs([("alive", true)]));
    /// let rabbit = heap.alloc_object(JsObject::from_pairs([("jumps", true)]));
    /// heap.store_mut(rabbit).unwrap().proto = Some(animal);
    ///
    /// assert_eq!(heap.lookup(rabbit, "alive").unwrap(), Value::Boolean(true));
    /// assert_eq!(heap.lookup(rabbit, "swims").unwrap(), Value::Undefined);
    /// ```
    pub fn lookup(&self, store: Handle, key: &str) -> Result<Value, JsError> {
        match self.find_owner(store, key)? {
            Some(owner) => Ok(self
                .store(owner)?
                .get_own(key)
                .cloned()
                .unwrap_or_default()),
            None => Ok(Value::Undefined),
        }
    }

    /// Returns whether `key` is present anywhere on the chain. Read-only.
    pub fn has(&self, store: Handle, key: &str) -> Result<bool, JsError> {
        Ok(self.find_owner(store, key)?.is_some())
    }

    /// The read-or-create subscript.
    ///
    /// Returns a mutable borrow of the owning slot wherever the chain found
    /// it. On a full-chain miss an own `Undefined` entry is created on the
    /// original receiver, never on an ancestor, and returned.
    pub fn access(&mut self, store: Handle, key: &str) -> Result<&mut Value, JsError> {
        let target = self.find_owner(store, key)?.unwrap_or(store);
        Ok(self.store_mut(target)?.ensure_own(key))
    }

    /// Assigns through the chain.
    ///
    /// If some store on the chain owns `key`, that slot is mutated in place,
    /// even when it belongs to an ancestor shared by other delegators. Only a
    /// full-chain miss creates an own entry on the receiver.
    pub fn assign(
        &mut self,
        store: Handle,
        key: &str,
        value: impl Into<Value>,
    ) -> Result<(), JsError> {
        let target = self.find_owner(store, key)?.unwrap_or(store);
        self.store_mut(target)?.set_own(key, value.into());
        Ok(())
    }

    /// Allocates a fresh scope record delegating to `parent`.
    ///
    /// Scope records are ordinary stores; variable declaration is `set_own`
    /// on the innermost scope, variable reference is [`JsHeap::lookup`], and
    /// variable assignment is [`JsHeap::assign`] so inner scopes write
    /// through to the declaring one.
    pub fn new_scope(&mut self, parent: Option<Handle>) -> Handle {
        let mut record = JsObject::new();
        record.proto = parent;
        self.alloc_object(record)
    }
}
