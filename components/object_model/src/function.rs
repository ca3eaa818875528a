//! The callable store.
//!
//! A `JsFunction` composes a [`JsObject`] property bag with one owned
//! invocable body. Composition, not subtyping: the function "has a" body and
//! "is a" store. Calling the function never touches its property map, and
//! reading its properties never touches the body.

use std::fmt;
use std::rc::Rc;

use core_types::{Handle, JsError, Value};

use crate::gc_integration::JsHeap;
use crate::object::JsObject;

/// The invocable unit owned by a callable store.
///
/// The calling convention is always `(receiver, argument-sequence)`: the
/// receiver is an explicit first parameter (the empty value for free calls),
/// and all variadic behavior goes through the one argument slice. The body
/// also receives the heap so it can read and write stores.
pub type FunctionBody = Rc<dyn Fn(&mut JsHeap, Value, &[Value]) -> Result<Value, JsError>>;

/// A delegating store that additionally owns a [`FunctionBody`].
///
/// A callable store is itself a valid [`Value`] and a valid delegation
/// target; constructor functions carry their shared `"prototype"` store as
/// an ordinary property.
pub struct JsFunction {
    /// The property bag half of the callable store.
    pub object: JsObject,
    /// Heap edges the body closes over.
    ///
    /// Every handle the body captures must be registered here so the
    /// collector sees the edge; a snapshot-captured primitive needs no
    /// registration.
    pub captures: Vec<Handle>,
    body: FunctionBody,
}

impl JsFunction {
    /// Creates a callable store with an empty property map and no captures.
    pub fn new(
        body: impl Fn(&mut JsHeap, Value, &[Value]) -> Result<Value, JsError> + 'static,
    ) -> Self {
        JsFunction {
            object: JsObject::new(),
            captures: Vec::new(),
            body: Rc::new(body),
        }
    }

    /// Creates a callable store whose body closes over the given heap edges.
    pub fn with_captures(
        captures: Vec<Handle>,
        body: impl Fn(&mut JsHeap, Value, &[Value]) -> Result<Value, JsError> + 'static,
    ) -> Self {
        JsFunction {
            object: JsObject::new(),
            captures,
            body: Rc::new(body),
        }
    }

    /// Returns a shared handle to the body.
    ///
    /// Invocation clones the `Rc` first so the body may re-enter the heap
    /// that owns its function.
    pub fn body(&self) -> FunctionBody {
        Rc::clone(&self.body)
    }

    /// Returns the number of registered capture edges.
    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }
}

impl fmt::Debug for JsFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsFunction")
            .field("object", &self.object)
            .field("captures", &self.captures)
            .field("body", &"...")
            .finish()
    }
}
