//! Heap handles.
//!
//! Stores and cells owned by the tracing collector are referenced by slot
//! index rather than by pointer, so a handle stays `Copy` and the collector
//! can reclaim slots without chasing borrows.

use std::fmt;

/// An index-based reference to a node owned by the collector heap.
///
/// A handle says nothing about the kind of node it points at; the heap
/// resolves it and reports a fault if the slot has been reclaimed.
///
/// # Examples
///
/// ```
/// use core_types::Handle;
///
/// let h = Handle::new(3);
/// assert_eq!(h.index(), 3);
/// assert_eq!(h.to_string(), "#3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(usize);

impl Handle {
    /// Creates a handle for the given slot index.
    pub fn new(index: usize) -> Self {
        Handle(index)
    }

    /// Returns the slot index this handle refers to.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
