//! Closure end-to-end scenarios
//!
//! Tests cover:
//! - make_adder and value capture outliving the creating call
//! - The shared-slot loop hazard and its per-iteration repair
//! - Closures over collector-owned cells
//! - Factories returning closures that share and that do not share state

use std::rc::Rc;

use core_types::Value;
use object_model::{
    make_adder, new_shared_slot, Capture, JsFunction, JsHeap, OutputSink,
};

#[test]
fn test_make_adder_scenario() {
    let add3 = make_adder(3);
    let add7 = make_adder(7);

    assert_eq!(add3(5), 8);
    assert_eq!(add7(5), 12);
    // Each adder's binding is its own.
    assert_eq!(add3(5), 8);
}

#[test]
fn test_closures_in_loop_by_reference_then_by_value() {
    let sink = OutputSink::new();

    // Shared slot: every closure aliases the one loop variable.
    let i = new_shared_slot(0);
    let mut shared: Vec<Box<dyn Fn()>> = Vec::new();
    for _ in 0..3 {
        let capture = Capture::Shared(Rc::clone(&i));
        let out = sink.clone();
        shared.push(Box::new(move || out.print(&capture.get())));
    }
    *i.borrow_mut() = Value::Int(3);
    for f in &shared {
        f();
    }
    assert_eq!(sink.contents(), "333");

    // Snapshot: each closure keeps the index it saw.
    sink.clear();
    let mut copied: Vec<Box<dyn Fn()>> = Vec::new();
    for index in 0..3 {
        let capture = Capture::Snapshot(Value::Int(index));
        let out = sink.clone();
        copied.push(Box::new(move || out.print(&capture.get())));
    }
    for f in &copied {
        f();
    }
    assert_eq!(sink.contents(), "012");
}

#[test]
fn test_per_iteration_copy_scenario() {
    let sink = OutputSink::new();
    let i = new_shared_slot(0);

    let mut closures: Vec<Box<dyn Fn()>> = Vec::new();
    for index in 0..3 {
        *i.borrow_mut() = Value::Int(index);
        // var j = i; the copy gives each closure its own slot.
        let j = Capture::Shared(new_shared_slot(i.borrow().clone()));
        let out = sink.clone();
        closures.push(Box::new(move || out.print(&j.get())));
    }
    *i.borrow_mut() = Value::Int(3);

    for f in &closures {
        f();
    }
    assert_eq!(sink.contents(), "012");
}

#[test]
fn test_heap_closures_in_loop_print_each_index() {
    let mut heap = JsHeap::new();
    let sink = OutputSink::new();

    let mut printers = Vec::new();
    for index in 0..3 {
        let cell = heap.alloc_cell(Value::Int(index));
        let out = sink.clone();
        let printer = heap.alloc_function(JsFunction::with_captures(
            vec![cell],
            move |heap, _, _| {
                out.print(&heap.cell(cell)?);
                Ok(Value::Undefined)
            },
        ));
        heap.add_root(printer);
        printers.push(printer);
    }

    for &printer in &printers {
        heap.call(printer, Value::Undefined, &[]).unwrap();
    }
    assert_eq!(sink.contents(), "012");
}

#[test]
fn test_counter_factory_makes_independent_counters() {
    fn make_counter(heap: &mut JsHeap) -> core_types::Handle {
        let count = heap.alloc_cell(Value::Int(0));
        let counter = heap.alloc_function(JsFunction::with_captures(
            vec![count],
            move |heap, _, _| {
                let next = heap.cell(count)?.as_int()? + 1;
                heap.set_cell(count, Value::Int(next))?;
                Ok(Value::Int(next))
            },
        ));
        heap.add_root(counter);
        counter
    }

    let mut heap = JsHeap::new();
    let first = make_counter(&mut heap);
    let second = make_counter(&mut heap);

    assert_eq!(heap.call(first, Value::Undefined, &[]).unwrap(), Value::Int(1));
    assert_eq!(heap.call(first, Value::Undefined, &[]).unwrap(), Value::Int(2));
    // The second counter's cell is untouched by the first.
    assert_eq!(heap.call(second, Value::Undefined, &[]).unwrap(), Value::Int(1));
}

#[test]
fn test_two_closures_sharing_one_cell() {
    let mut heap = JsHeap::new();
    let balance = heap.alloc_cell(Value::Int(100));

    let deposit = heap.alloc_function(JsFunction::with_captures(
        vec![balance],
        move |heap, _, args| {
            let next = heap.cell(balance)?.as_int()? + args[0].as_int()?;
            heap.set_cell(balance, Value::Int(next))?;
            Ok(Value::Int(next))
        },
    ));
    let read = heap.alloc_function(JsFunction::with_captures(
        vec![balance],
        move |heap, _, _| heap.cell(balance),
    ));
    heap.add_root(deposit);
    heap.add_root(read);

    heap.call(deposit, Value::Undefined, &[Value::Int(50)]).unwrap();
    assert_eq!(
        heap.call(read, Value::Undefined, &[]).unwrap(),
        Value::Int(150)
    );
}
