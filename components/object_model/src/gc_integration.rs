//! Collector integration for the object model.
//!
//! Every store, callable store, and shared variable cell that participates
//! in a delegation chain, escapes its creating scope, or sits on a cycle is
//! owned by the tracing collector. [`HeapValue`] is the node type;
//! [`JsHeap`] is the typed facade the rest of the crate (and the scenario
//! suites) work through.

use core_types::{Handle, JsError, Value};
use memory_manager::{CollectionStats, Heap, Trace, Tracer};

use crate::function::JsFunction;
use crate::object::JsObject;

/// One collector-owned node of the object graph.
#[derive(Debug)]
pub enum HeapValue {
    /// A delegating store (object, array-as-object, scope record,
    /// prototype).
    Object(JsObject),
    /// A callable store.
    Function(JsFunction),
    /// A shared mutable variable cell, the collector-owned form of
    /// reference capture.
    Cell(Value),
}

impl HeapValue {
    /// Runtime kind tag, used in fault messages.
    pub fn kind(&self) -> &'static str {
        match self {
            HeapValue::Object(_) => "object",
            HeapValue::Function(_) => "function",
            HeapValue::Cell(_) => "cell",
        }
    }

    /// The property-bag view shared by objects and functions.
    ///
    /// A callable store is a valid delegation target, so chain walking uses
    /// this view rather than demanding a plain object.
    pub fn as_store(&self) -> Option<&JsObject> {
        match self {
            HeapValue::Object(object) => Some(object),
            HeapValue::Function(function) => Some(&function.object),
            HeapValue::Cell(_) => None,
        }
    }

    /// Mutable variant of [`HeapValue::as_store`].
    pub fn as_store_mut(&mut self) -> Option<&mut JsObject> {
        match self {
            HeapValue::Object(object) => Some(object),
            HeapValue::Function(function) => Some(&mut function.object),
            HeapValue::Cell(_) => None,
        }
    }
}

fn trace_value(value: &Value, tracer: &mut Tracer) {
    match value {
        Value::Object(handle) | Value::Function(handle) => tracer.visit(*handle),
        _ => {}
    }
}

fn trace_store(object: &JsObject, tracer: &mut Tracer) {
    if let Some(proto) = object.proto {
        tracer.visit(proto);
    }
    for value in object.values() {
        trace_value(value, tracer);
    }
}

impl Trace for HeapValue {
    fn trace(&self, tracer: &mut Tracer) {
        match self {
            HeapValue::Object(object) => trace_store(object, tracer),
            HeapValue::Function(function) => {
                trace_store(&function.object, tracer);
                for &capture in &function.captures {
                    tracer.visit(capture);
                }
            }
            HeapValue::Cell(value) => trace_value(value, tracer),
        }
    }
}

/// Typed facade over `Heap<HeapValue>`.
///
/// Allocation hands out plain [`Handle`]s; accessors resolve them back to
/// the expected kind, faulting with [`JsError::DanglingHandle`] for
/// reclaimed slots and [`JsError::TypeMismatch`] for wrong-kind access.
/// Delegation-chain operations and invocation are implemented on this type
/// in the `chain` and `dispatch` modules.
#[derive(Debug, Default)]
pub struct JsHeap {
    heap: Heap<HeapValue>,
}

impl JsHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        JsHeap { heap: Heap::new() }
    }

    /// Allocates a delegating store.
    pub fn alloc_object(&mut self, object: JsObject) -> Handle {
        self.heap.alloc(HeapValue::Object(object))
    }

    /// Allocates a callable store.
    pub fn alloc_function(&mut self, function: JsFunction) -> Handle {
        self.heap.alloc(HeapValue::Function(function))
    }

    /// Allocates a shared variable cell.
    pub fn alloc_cell(&mut self, value: Value) -> Handle {
        self.heap.alloc(HeapValue::Cell(value))
    }

    pub(crate) fn node(&self, handle: Handle) -> Result<&HeapValue, JsError> {
        self.heap.get(handle).ok_or(JsError::DanglingHandle(handle))
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> Result<&mut HeapValue, JsError> {
        self.heap
            .get_mut(handle)
            .ok_or(JsError::DanglingHandle(handle))
    }

    /// Resolves a handle to a plain object.
    pub fn object(&self, handle: Handle) -> Result<&JsObject, JsError> {
        match self.node(handle)? {
            HeapValue::Object(object) => Ok(object),
            other => Err(JsError::TypeMismatch {
                expected: "object",
                found: other.kind(),
            }),
        }
    }

    /// Mutable variant of [`JsHeap::object`].
    pub fn object_mut(&mut self, handle: Handle) -> Result<&mut JsObject, JsError> {
        match self.node_mut(handle)? {
            HeapValue::Object(object) => Ok(object),
            other => Err(JsError::TypeMismatch {
                expected: "object",
                found: other.kind(),
            }),
        }
    }

    /// Resolves a handle to a callable store.
    pub fn function(&self, handle: Handle) -> Result<&JsFunction, JsError> {
        match self.node(handle)? {
            HeapValue::Function(function) => Ok(function),
            other => Err(JsError::TypeMismatch {
                expected: "function",
                found: other.kind(),
            }),
        }
    }

    /// Resolves a handle to the property-bag view of an object OR function.
    pub fn store(&self, handle: Handle) -> Result<&JsObject, JsError> {
        let node = self.node(handle)?;
        node.as_store().ok_or(JsError::TypeMismatch {
            expected: "object",
            found: node.kind(),
        })
    }

    /// Mutable variant of [`JsHeap::store`].
    pub fn store_mut(&mut self, handle: Handle) -> Result<&mut JsObject, JsError> {
        let node = self.node_mut(handle)?;
        let kind = node.kind();
        node.as_store_mut().ok_or(JsError::TypeMismatch {
            expected: "object",
            found: kind,
        })
    }

    /// Reads a shared variable cell.
    pub fn cell(&self, handle: Handle) -> Result<Value, JsError> {
        match self.node(handle)? {
            HeapValue::Cell(value) => Ok(value.clone()),
            other => Err(JsError::TypeMismatch {
                expected: "cell",
                found: other.kind(),
            }),
        }
    }

    /// Writes a shared variable cell.
    pub fn set_cell(&mut self, handle: Handle, value: Value) -> Result<(), JsError> {
        match self.node_mut(handle)? {
            HeapValue::Cell(slot) => {
                *slot = value;
                Ok(())
            }
            other => Err(JsError::TypeMismatch {
                expected: "cell",
                found: other.kind(),
            }),
        }
    }

    /// Adds a node to the collector's root set.
    pub fn add_root(&mut self, handle: Handle) {
        self.heap.add_root(handle);
    }

    /// Removes one occurrence of a node from the root set.
    pub fn remove_root(&mut self, handle: Handle) {
        self.heap.remove_root(handle);
    }

    /// Returns whether the handle still resolves to a live node.
    pub fn contains(&self, handle: Handle) -> bool {
        self.heap.contains(handle)
    }

    /// Returns the number of live nodes.
    pub fn live_count(&self) -> usize {
        self.heap.live_count()
    }

    /// Runs one explicit mark-and-sweep collection.
    pub fn collect(&mut self) -> CollectionStats {
        self.heap.collect()
    }
}
