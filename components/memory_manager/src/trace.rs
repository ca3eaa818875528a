//! Edge reporting for the mark phase.

use core_types::Handle;

/// Worklist used during the mark phase.
///
/// Nodes report each outgoing handle edge through [`Tracer::visit`]; the
/// heap drains the worklist until every reachable node has been marked.
#[derive(Debug, Default)]
pub struct Tracer {
    pending: Vec<Handle>,
}

impl Tracer {
    pub(crate) fn new() -> Self {
        Tracer {
            pending: Vec::new(),
        }
    }

    /// Reports one outgoing edge to the collector.
    pub fn visit(&mut self, handle: Handle) {
        self.pending.push(handle);
    }

    pub(crate) fn pop(&mut self) -> Option<Handle> {
        self.pending.pop()
    }
}

/// Implemented by heap node types so the collector can walk the object graph.
///
/// An implementation must report every handle the node keeps alive and
/// nothing else; an unreported edge makes the collector reclaim a node that
/// is still in use.
pub trait Trace {
    /// Reports each outgoing handle edge of this node to `tracer`.
    fn trace(&self, tracer: &mut Tracer);
}
