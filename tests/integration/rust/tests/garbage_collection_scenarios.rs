//! Collector end-to-end scenarios
//!
//! Tests cover:
//! - Explicit collection reclaiming unreachable stores and cells
//! - Rooted closures keeping captured cells observable across collections
//! - Factory, shared-prototype factory, and constructor allocation patterns
//! - Cyclic graphs: unreachable cycles reclaimed, rooted cycles retained

use core_types::Value;
use object_model::{JsFunction, JsHeap, JsObject, OutputSink};

#[test]
fn test_collect_reclaims_unrooted_garbage_only() {
    let mut heap = JsHeap::new();
    let kept = heap.alloc_object(JsObject::from_pairs([("keep", true)]));
    let _dropped = heap.alloc_object(JsObject::from_pairs([("keep", false)]));
    heap.add_root(kept);

    let stats = heap.collect();
    assert_eq!(stats.live, 1);
    assert_eq!(stats.reclaimed, 1);
    assert_eq!(heap.lookup(kept, "keep").unwrap(), Value::Boolean(true));
}

#[test]
fn test_allocation_never_collects() {
    let mut heap = JsHeap::new();
    let unrooted = heap.alloc_object(JsObject::new());

    // Nothing roots it, but only collect() reclaims.
    for _ in 0..100 {
        heap.alloc_cell(Value::Int(0));
    }
    assert!(heap.contains(unrooted));
    assert_eq!(heap.live_count(), 101);
}

#[test]
fn test_rooted_closures_observe_cells_across_collections() {
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

    // Garbage alongside the printers.
    heap.alloc_object(JsObject::new());
    heap.alloc_cell(Value::Int(99));

    let stats = heap.collect();
    assert_eq!(stats.live, 6); // 3 printers + 3 captured cells
    assert_eq!(stats.reclaimed, 2);

    for &printer in &printers {
        heap.call(printer, Value::Undefined, &[]).unwrap();
    }
    assert_eq!(sink.contents(), "012");
}

#[test]
fn test_unrooting_releases_closure_and_capture() {
    let mut heap = JsHeap::new();
    let cell = heap.alloc_cell(Value::Int(7));
    let f = heap.alloc_function(JsFunction::with_captures(vec![cell], move |heap, _, _| {
        heap.cell(cell)
    }));
    heap.add_root(f);

    heap.collect();
    assert!(heap.contains(cell));

    heap.remove_root(f);
    let stats = heap.collect();
    assert_eq!(stats.reclaimed, 2);
    assert!(!heap.contains(f));
    assert!(!heap.contains(cell));
}

#[test]
fn test_factory_pattern_under_collector() {
    fn make_rabbit(heap: &mut JsHeap, name: &str) -> core_types::Handle {
        heap.alloc_object(JsObject::from_pairs([
            ("name", Value::from(name)),
            ("jumps", Value::Boolean(true)),
        ]))
    }

    let mut heap = JsHeap::new();
    let white = make_rabbit(&mut heap, "White");
    let black = make_rabbit(&mut heap, "Black");
    heap.add_root(white);

    heap.collect();
    assert_eq!(heap.lookup(white, "name").unwrap().as_str().unwrap(), "White");
    assert!(!heap.contains(black));
}

#[test]
fn test_shared_prototype_factory_under_collector() {
    let mut heap = JsHeap::new();
    let proto = heap.alloc_object(JsObject::from_pairs([("eats", true)]));

    let make = |heap: &mut JsHeap, name: &str| {
        let mut store = JsObject::from_pairs([("name", Value::from(name))]);
        store.proto = Some(proto);
        heap.alloc_object(store)
    };
    let white = make(&mut heap, "White");
    let black = make(&mut heap, "Black");
    heap.add_root(white);
    heap.add_root(black);

    // The prototype is unrooted but reachable through both instances.
    let stats = heap.collect();
    assert_eq!(stats.live, 3);
    assert_eq!(heap.lookup(white, "eats").unwrap(), Value::Boolean(true));
    assert_eq!(heap.lookup(black, "eats").unwrap(), Value::Boolean(true));
}

#[test]
fn test_constructor_pattern_under_collector() {
    let mut heap = JsHeap::new();
    let prototype = heap.alloc_object(JsObject::from_pairs([("legs", 4)]));
    let ctor = heap.alloc_function(JsFunction::new(|heap, receiver, args| {
        let this = receiver.as_object()?;
        heap.store_mut(this)?.set_own("name", args[0].clone());
        Ok(Value::Undefined)
    }));
    heap.store_mut(ctor)
        .unwrap()
        .set_own("prototype", Value::Object(prototype));
    heap.add_root(ctor);

    let dog = heap.construct(ctor, &[Value::from("Rex")]).unwrap();
    heap.add_root(dog);

    // ctor keeps the prototype alive through its own property map.
    let stats = heap.collect();
    assert_eq!(stats.live, 3);
    assert_eq!(heap.lookup(dog, "legs").unwrap(), Value::Int(4));
    assert_eq!(heap.lookup(dog, "name").unwrap().as_str().unwrap(), "Rex");
}

#[test]
fn test_unreachable_proto_cycle_is_reclaimed() {
    let mut heap = JsHeap::new();
    let a = heap.alloc_object(JsObject::new());
    let b = heap.alloc_object(JsObject::new());
    heap.store_mut(a).unwrap().proto = Some(b);
    heap.store_mut(b).unwrap().proto = Some(a);

    // Reference counting would leak this ring; tracing reclaims it.
    let stats = heap.collect();
    assert_eq!(stats.reclaimed, 2);
    assert!(!heap.contains(a));
    assert!(!heap.contains(b));
}

#[test]
fn test_rooted_cycle_is_retained() {
    let mut heap = JsHeap::new();
    let a = heap.alloc_object(JsObject::new());
    let b = heap.alloc_object(JsObject::new());
    heap.store_mut(a).unwrap().proto = Some(b);
    heap.store_mut(b).unwrap().proto = Some(a);
    heap.add_root(a);

    let stats = heap.collect();
    assert_eq!(stats.live, 2);
    assert!(heap.contains(a));
    assert!(heap.contains(b));
}

#[test]
fn test_mutual_property_cycle_through_values() {
    let mut heap = JsHeap::new();
    let parent = heap.alloc_object(JsObject::new());
    let child = heap.alloc_object(JsObject::new());
    heap.assign(parent, "child", Value::Object(child)).unwrap();
    heap.assign(child, "parent", Value::Object(parent)).unwrap();

    heap.add_root(parent);
    let stats = heap.collect();
    assert_eq!(stats.live, 2);

    heap.remove_root(parent);
    let stats = heap.collect();
    assert_eq!(stats.reclaimed, 2);
}

#[test]
fn test_reclaimed_handle_faults_until_slot_reuse() {
    let mut heap = JsHeap::new();
    let stale = heap.alloc_object(JsObject::new());
    heap.collect();

    // Between reclamation and reuse the handle is a fault, not a crash.
    assert!(!heap.contains(stale));
    assert!(heap.lookup(stale, "x").is_err());

    // A later allocation may reuse the slot, revalidating the index.
    let fresh = heap.alloc_object(JsObject::from_pairs([("fresh", true)]));
    assert_eq!(fresh, stale);
    assert_eq!(heap.lookup(fresh, "fresh").unwrap(), Value::Boolean(true));
}
