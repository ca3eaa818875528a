//! Dynamically typed value representation.
//!
//! This module provides the core `Value` enum: a type-erased cell holding
//! exactly one value whose runtime type is always queryable and which can be
//! narrowed back out with a fallible accessor.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{Handle, JsError};

/// A dynamically typed value.
///
/// Primitives are stored inline; stores and callable stores are referenced
/// by [`Handle`] into the collector heap. `Native` carries an arbitrary user
/// type behind a runtime-queryable box, for values the object model does not
/// interpret.
///
/// Narrowing with the wrong expected type is a contract violation and fails
/// with [`JsError::TypeMismatch`]; there is no silent coercion. The one
/// sanctioned coercion (number-to-text under string concatenation) lives in
/// the object-model crate's `js_plus`, not here.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let x = Value::Boolean(true);
/// assert_eq!(x.as_bool().unwrap(), true);
///
/// let x = Value::Int(42);
/// assert_eq!(x.as_int().unwrap(), 42);
///
/// let x = Value::from("Hello");
/// assert_eq!(x.as_str().unwrap(), "Hello");
/// assert!(x.as_int().is_err());
/// ```
#[derive(Clone)]
pub enum Value {
    /// The distinguished empty value; also what a missing-property read
    /// yields. "Absent" and "present but undefined" are deliberately
    /// indistinguishable.
    Undefined,
    /// Boolean true or false.
    Boolean(bool),
    /// 32-bit integer.
    Int(i32),
    /// IEEE 754 double-precision floating point.
    Double(f64),
    /// Text value.
    String(String),
    /// Reference to a delegating store owned by the collector heap.
    Object(Handle),
    /// Reference to a callable store owned by the collector heap.
    Function(Handle),
    /// An opaque user value (arbitrary type, compared by identity).
    Native(Rc<RefCell<dyn Any>>),
}

impl Value {
    /// Wraps an arbitrary user value.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// struct SomeArbitraryType;
    ///
    /// let v = Value::native(SomeArbitraryType);
    /// assert_eq!(v.type_of(), "native");
    /// ```
    pub fn native<T: 'static>(value: T) -> Self {
        Value::Native(Rc::new(RefCell::new(value)))
    }

    /// Returns the runtime type tag of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Undefined.type_of(), "undefined");
    /// assert_eq!(Value::Int(1).type_of(), "number");
    /// assert_eq!(Value::Double(1.0).type_of(), "number");
    /// assert_eq!(Value::from("x").type_of(), "string");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Boolean(_) => "boolean",
            Value::Int(_) => "number",
            Value::Double(_) => "number",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::Native(_) => "native",
        }
    }

    /// Returns whether this value is the distinguished empty value.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns whether this value holds a number (integer or double).
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Double(_))
    }

    /// Returns whether this value holds text.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns whether this value is truthy.
    ///
    /// Undefined, false, zero, NaN, and the empty string are falsy; all
    /// store references are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Boolean(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Double(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Object(_) => true,
            Value::Function(_) => true,
            Value::Native(_) => true,
        }
    }

    /// Narrows to a boolean, faulting if the value holds anything else.
    pub fn as_bool(&self) -> Result<bool, JsError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Narrows to an integer, faulting if the value holds anything else.
    pub fn as_int(&self) -> Result<i32, JsError> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(other.mismatch("number")),
        }
    }

    /// Narrows to a double, faulting if the value holds anything else.
    pub fn as_double(&self) -> Result<f64, JsError> {
        match self {
            Value::Double(n) => Ok(*n),
            other => Err(other.mismatch("number")),
        }
    }

    /// Narrows to text, faulting if the value holds anything else.
    pub fn as_str(&self) -> Result<&str, JsError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    /// Narrows to a store handle, faulting if the value holds anything else.
    pub fn as_object(&self) -> Result<Handle, JsError> {
        match self {
            Value::Object(h) => Ok(*h),
            other => Err(other.mismatch("object")),
        }
    }

    /// Narrows to a callable-store handle, faulting if the value holds
    /// anything else.
    pub fn as_function(&self) -> Result<Handle, JsError> {
        match self {
            Value::Function(h) => Ok(*h),
            other => Err(other.mismatch("function")),
        }
    }

    /// Narrows to the opaque native box, faulting if the value holds
    /// anything else. The concrete type is recovered with `downcast_ref`.
    pub fn as_native(&self) -> Result<Rc<RefCell<dyn Any>>, JsError> {
        match self {
            Value::Native(b) => Ok(Rc::clone(b)),
            other => Err(other.mismatch("native")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> JsError {
        JsError::TypeMismatch {
            expected,
            found: self.type_of(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Double(n) => f.debug_tuple("Double").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Object(h) => f.debug_tuple("Object").field(h).finish(),
            Value::Function(h) => f.debug_tuple("Function").field(h).finish(),
            Value::Native(_) => write!(f, "Native(...)"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Native(a), Value::Native(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Decimal text conversion used for output and string concatenation.
///
/// - integers print without a decimal point
/// - integer-valued doubles also print without a decimal point
/// - store references print their placeholder forms
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Int(42).to_string(), "42");
/// assert_eq!(Value::Double(3.14).to_string(), "3.14");
/// assert_eq!(Value::Double(3.0).to_string(), "3");
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Value::Int(n) => write!(f, "{}", n),
            Value::Double(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if n.is_sign_positive() {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    // Integer-valued doubles display without decimal point
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::String(s) => write!(f, "{}", s),
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Function(_) => write!(f, "function () {{ [body] }}"),
            Value::Native(_) => write!(f, "[native value]"),
        }
    }
}
