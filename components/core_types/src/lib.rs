//! Core value types and fault handling for the object-model library.
//!
//! This crate provides the foundational types every other component builds
//! on: the type-erased value cell, the heap handle it uses to reference
//! collector-owned stores, and the fault taxonomy.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of dynamically typed values
//! - [`Handle`] - Index-based reference to a collector-owned heap node
//! - [`JsError`] - Faults raised by narrowing and heap access
//!
//! # Examples
//!
//! ```
//! use core_types::Value;
//!
//! let num = Value::Int(42);
//! assert_eq!(num.type_of(), "number");
//! assert_eq!(num.as_int().unwrap(), 42);
//!
//! // Narrowing to the wrong type fails loudly instead of coercing.
//! assert!(num.as_str().is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod handle;
mod value;

pub use error::JsError;
pub use handle::Handle;
pub use value::Value;
