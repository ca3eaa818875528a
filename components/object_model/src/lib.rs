//! Dynamic object model over a statically typed substrate.
//!
//! This crate reproduces the core object model of a dynamic scripting
//! language: objects are delegating key-value stores, functions are stores
//! that also own an invocable body, closures capture free variables by copy
//! or by shared reference, scopes are stores linked to their lexical parent,
//! and `new`-style construction is a four-step protocol over those pieces.
//!
//! # Overview
//!
//! - [`JsObject`] - own-property map plus a single delegation link
//! - [`JsFunction`] - property bag composed with an owned [`FunctionBody`]
//! - [`JsHeap`] - typed facade over the tracing collector; chain lookup,
//!   invocation, and the construct protocol live here
//! - [`Capture`] - scope-bound value/reference capture disciplines
//! - [`js_plus`] / [`plus_all`] - the string/number combination rule
//! - [`OutputSink`] - text sink scenarios use to observe invocation order
//!
//! # Example
//!
//! ```
//! use core_types::Value;
//! use object_model::{JsHeap, JsObject};
//!
//! let mut heap = JsHeap::new();
//! let proto = heap.alloc_object(JsObject::from_pairs([("b", 3), ("c", 4)]));
//! let o = heap.alloc_object(JsObject::from_pairs([("a", 1), ("b", 2)]));
//! heap.store_mut(o).unwrap().proto = Some(proto);
//!
//! // Own property shadows the delegate; misses fall through the chain.
//! assert_eq!(heap.lookup(o, "b").unwrap(), Value::Int(2));
//! assert_eq!(heap.lookup(o, "c").unwrap(), Value::Int(4));
//! assert_eq!(heap.lookup(o, "d").unwrap(), Value::Undefined);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod chain;
mod dispatch;
mod function;
mod gc_integration;
mod object;
mod output;
mod upvalue;

pub use dispatch::{js_plus, plus_all};
pub use function::{FunctionBody, JsFunction};
pub use gc_integration::{HeapValue, JsHeap};
pub use object::JsObject;
pub use output::OutputSink;
pub use upvalue::{make_adder, new_shared_slot, Capture, SharedSlot};
