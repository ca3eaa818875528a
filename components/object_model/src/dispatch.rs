//! Invocation, construction, and the `+` combination rule.

use core_types::{Handle, JsError, Value};

use crate::gc_integration::JsHeap;
use crate::object::JsObject;

impl JsHeap {
    /// Invokes a callable store.
    ///
    /// The receiver travels as an explicit first argument (`Undefined` for a
    /// free call) and all arguments go through one slice; arity is whatever
    /// the body makes of that slice. The body `Rc` is cloned before the call
    /// so the callee may allocate, look up, and call back into this heap.
    pub fn call(
        &mut self,
        func: Handle,
        receiver: Value,
        args: &[Value],
    ) -> Result<Value, JsError> {
        let body = self.function(func)?.body();
        body(self, receiver, args)
    }

    /// Runs the four-step construct protocol.
    ///
    /// 1. Allocate an empty store.
    /// 2. Link its `proto` to the constructor's `"prototype"` property,
    ///    found by chain lookup; anything but an object there is a fault.
    /// 3. Invoke the constructor with the new store as receiver, discarding
    ///    the return value.
    /// 4. Return the new store.
    ///
    /// Constructor faults propagate as-is; a partially initialized store is
    /// simply left unrooted for the next collection.
    pub fn construct(&mut self, ctor: Handle, args: &[Value]) -> Result<Handle, JsError> {
        let prototype = self.lookup(ctor, "prototype")?;
        let proto = prototype.as_object()?;

        let mut store = JsObject::new();
        store.proto = Some(proto);
        let instance = self.alloc_object(store);

        self.call(ctor, Value::Object(instance), args)?;
        Ok(instance)
    }
}

fn render(value: &Value) -> Result<String, JsError> {
    match value {
        Value::Int(_) | Value::Double(_) | Value::String(_) => Ok(value.to_string()),
        other => Err(JsError::TypeMismatch {
            expected: "number or string",
            found: other.type_of(),
        }),
    }
}

/// Combines two values the way the scripting `+` does.
///
/// If either operand is text, the other is rendered to decimal text and the
/// two are concatenated in operand order. Otherwise both operands must be
/// numeric: `Int + Int` stays `Int` while the sum fits, and any other
/// numeric pairing (or an overflowing sum) widens to `Double`. Everything
/// else is a [`JsError::TypeMismatch`].
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use object_model::js_plus;
///
/// assert_eq!(js_plus(&Value::Int(3), &Value::Int(4)).unwrap(), Value::Int(7));
/// assert_eq!(
///     js_plus(&Value::Int(12), &Value::from("!")).unwrap(),
///     Value::from("12!")
/// );
/// ```
pub fn js_plus(a: &Value, b: &Value) -> Result<Value, JsError> {
    if matches!(a, Value::String(_)) || matches!(b, Value::String(_)) {
        let mut text = render(a)?;
        text.push_str(&render(b)?);
        return Ok(Value::String(text));
    }
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(match x.checked_add(*y) {
            Some(sum) => Value::Int(sum),
            None => Value::Double(f64::from(*x) + f64::from(*y)),
        }),
        (Value::Int(x), Value::Double(y)) => Ok(Value::Double(f64::from(*x) + y)),
        (Value::Double(x), Value::Int(y)) => Ok(Value::Double(x + f64::from(*y))),
        (Value::Double(x), Value::Double(y)) => Ok(Value::Double(x + y)),
        _ => {
            let found = if a.is_number() { b } else { a };
            Err(JsError::TypeMismatch {
                expected: "number or string",
                found: found.type_of(),
            })
        }
    }
}

/// Left fold of [`js_plus`] over an argument sequence, starting from
/// `Int(0)`.
///
/// The starting zero means a fold that begins with numbers accumulates a
/// number until the first text operand flips the rest of the fold into
/// concatenation.
pub fn plus_all(args: &[Value]) -> Result<Value, JsError> {
    let mut acc = Value::Int(0);
    for arg in args {
        acc = js_plus(&acc, arg)?;
    }
    Ok(acc)
}
