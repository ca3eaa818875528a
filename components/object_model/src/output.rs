//! Observable text sink for scenario closures.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use core_types::Value;

/// A cloneable text-accumulating sink.
///
/// Closures under test write here instead of standard output so a test can
/// assert on what was printed and in what order. Clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct OutputSink {
    buffer: Rc<RefCell<String>>,
}

impl OutputSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        OutputSink::default()
    }

    /// Appends the display form of `value` to the buffer.
    pub fn print(&self, value: &Value) {
        use fmt::Write;
        let _ = write!(self.buffer.borrow_mut(), "{}", value);
    }

    /// Appends raw text to the buffer.
    pub fn print_str(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    /// Returns everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.borrow().clone()
    }

    /// Empties the buffer.
    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}
