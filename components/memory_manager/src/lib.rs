//! Memory Manager - tracing collector and heap management
//!
//! This component provides:
//! - An arena-style heap addressed by [`Handle`](core_types::Handle)
//! - A [`Trace`] trait through which nodes report their outgoing edges
//! - Mark-and-sweep collection triggered only by an explicit [`Heap::collect`]
//!
//! Collection is deferred: nothing is reclaimed at allocation time or on
//! drop of a handle. Cyclic structures (mutual delegation links, closures
//! capturing cells that reach back into the closure) are reclaimed as soon
//! as they become unreachable from the root set, which is exactly what
//! reference counting cannot do for this class of graph.

pub mod heap;
pub mod trace;

pub use heap::{CollectionStats, Heap};
pub use trace::{Trace, Tracer};
