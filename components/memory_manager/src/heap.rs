//! Arena heap with deferred mark-and-sweep collection.
//!
//! Allocation hands out [`Handle`]s into a slot vector; reclaimed slots go
//! on a free list and are reused by later allocations. Collection runs only
//! when the caller asks for it:
//! - Mark: walk the object graph from the explicit root set, following the
//!   edges each node reports through [`Trace::trace`]. Already-marked nodes
//!   are not revisited, so cycles terminate.
//! - Sweep: drop every unmarked slot. Handles into swept slots dangle and
//!   fault on their next use.

use core_types::Handle;

use crate::trace::{Trace, Tracer};

/// Counters reported by one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionStats {
    /// Nodes reachable from the root set (survivors).
    pub live: usize,
    /// Nodes reclaimed by the sweep.
    pub reclaimed: usize,
}

/// An arena of GC-managed nodes with an explicit root set.
///
/// The heap never collects on its own; allocation only ever grows or reuses
/// free slots. Callers that build cyclic or scope-escaping structures hold
/// roots for what must survive and invoke [`Heap::collect`] at a point of
/// their choosing.
#[derive(Debug)]
pub struct Heap<T> {
    slots: Vec<Option<T>>,
    free: Vec<usize>,
    roots: Vec<Handle>,
}

impl<T> Default for Heap<T> {
    fn default() -> Self {
        Heap {
            slots: Vec::new(),
            free: Vec::new(),
            roots: Vec::new(),
        }
    }
}

impl<T: Trace> Heap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Heap::default()
    }

    /// Allocates a node and returns its handle.
    ///
    /// Reuses a reclaimed slot when one is available. Never triggers a
    /// collection.
    pub fn alloc(&mut self, value: T) -> Handle {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(value);
                Handle::new(index)
            }
            None => {
                self.slots.push(Some(value));
                Handle::new(self.slots.len() - 1)
            }
        }
    }

    /// Resolves a handle to a node, or `None` if the slot was reclaimed.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots.get(handle.index()).and_then(|slot| slot.as_ref())
    }

    /// Mutable variant of [`Heap::get`].
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots
            .get_mut(handle.index())
            .and_then(|slot| slot.as_mut())
    }

    /// Returns whether the handle still resolves to a live node.
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Adds a handle to the root set.
    ///
    /// Everything reachable from a root survives collection.
    pub fn add_root(&mut self, handle: Handle) {
        self.roots.push(handle);
    }

    /// Removes one occurrence of a handle from the root set.
    pub fn remove_root(&mut self, handle: Handle) {
        if let Some(pos) = self.roots.iter().position(|&r| r == handle) {
            self.roots.remove(pos);
        }
    }

    /// Returns the current root set.
    pub fn roots(&self) -> &[Handle] {
        &self.roots
    }

    /// Returns the number of live nodes.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Marks from the root set and sweeps everything unreachable.
    ///
    /// This is the only reclamation point; it runs synchronously and to
    /// completion. Handles to swept nodes become dangling.
    pub fn collect(&mut self) -> CollectionStats {
        let mut marked = vec![false; self.slots.len()];
        let mut tracer = Tracer::new();

        for &root in &self.roots {
            tracer.visit(root);
        }

        while let Some(handle) = tracer.pop() {
            let index = handle.index();
            if index >= marked.len() || marked[index] {
                continue;
            }
            if let Some(node) = self.slots[index].as_ref() {
                marked[index] = true;
                node.trace(&mut tracer);
            }
        }

        let mut reclaimed = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_some() && !marked[index] {
                *slot = None;
                self.free.push(index);
                reclaimed += 1;
            }
        }

        CollectionStats {
            live: marked.iter().filter(|&&m| m).count(),
            reclaimed,
        }
    }
}
