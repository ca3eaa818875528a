//! Fault taxonomy.
//!
//! The library distinguishes exactly two faults, both of which indicate a
//! logic error in the calling code and are never recovered locally. A
//! missing property is NOT a fault; reads of absent keys yield
//! [`Value::Undefined`](crate::Value::Undefined).

use thiserror::Error;

use crate::Handle;

/// A fault raised by the object-model core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsError {
    /// A value was narrowed to a type it does not hold, a non-function was
    /// invoked, or a heap node was accessed as the wrong kind.
    ///
    /// Mirrors a dynamic-language runtime type error: surfaced, never
    /// silently coerced.
    #[error("TypeError: expected {expected}, found {found}")]
    TypeMismatch {
        /// The type the caller asked for.
        expected: &'static str,
        /// The type actually present.
        found: &'static str,
    },

    /// A handle whose slot has been reclaimed by the collector (or that
    /// never existed) was dereferenced.
    #[error("ReferenceError: dangling handle {0}")]
    DanglingHandle(Handle),
}
