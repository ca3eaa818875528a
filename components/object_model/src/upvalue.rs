//! Scope-bound capture disciplines.
//!
//! A closure may take a free variable two ways. A snapshot is an independent
//! copy made when the closure is created; later writes to the original are
//! invisible. A shared capture aliases the variable's live storage, so every
//! sharer observes every mutation. The classic three-iteration loop prints
//! `"012"` under per-iteration snapshots and `"333"` under one shared slot.

use std::cell::RefCell;
use std::rc::Rc;

use core_types::Value;

/// Aliasable live storage for one variable.
pub type SharedSlot = Rc<RefCell<Value>>;

/// Creates a shared slot holding `value`.
pub fn new_shared_slot(value: impl Into<Value>) -> SharedSlot {
    Rc::new(RefCell::new(value.into()))
}

/// One captured variable.
#[derive(Debug, Clone)]
pub enum Capture {
    /// An independent copy taken at closure-creation time.
    Snapshot(Value),
    /// The variable's live storage, shared with the creating scope and any
    /// other closures over it.
    Shared(SharedSlot),
}

impl Capture {
    /// Reads the captured variable's current value.
    pub fn get(&self) -> Value {
        match self {
            Capture::Snapshot(value) => value.clone(),
            Capture::Shared(slot) => slot.borrow().clone(),
        }
    }

    /// Writes the captured variable.
    ///
    /// Writing a snapshot only changes this closure's copy; writing a shared
    /// capture is visible to every sharer.
    pub fn set(&mut self, value: impl Into<Value>) {
        match self {
            Capture::Snapshot(slot) => *slot = value.into(),
            Capture::Shared(slot) => *slot.borrow_mut() = value.into(),
        }
    }

    /// Returns whether this capture aliases live storage.
    pub fn is_shared(&self) -> bool {
        matches!(self, Capture::Shared(_))
    }
}

/// Returns a function that adds `x` to its argument.
///
/// The simplest closure-producing call site: `x` is captured by value and
/// outlives the call that bound it.
///
/// # Examples
///
/// ```
/// use object_model::make_adder;
///
/// let add3 = make_adder(3);
/// assert_eq!(add3(5), 8);
/// assert_eq!(add3(10), 13);
/// ```
pub fn make_adder(x: i32) -> impl Fn(i32) -> i32 {
    move |y| x + y
}
