//! Integration tests for wrapped callbacks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use argy::{args, ArgyError, Arguments, SlotStack, Value};
use pretty_assertions::assert_eq;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_basic_scenarios_1() {
    init_tracing();

    let identify = SlotStack::from_shorthand("[string] [number]")
        .unwrap()
        .wrap(|values: Vec<Value>| values);

    assert_eq!(
        identify.call(args!["John"]).unwrap(),
        vec![Value::from("John"), Value::Undefined]
    );
    assert_eq!(
        identify.call(args!["Matt", 30]).unwrap(),
        vec![Value::from("Matt"), Value::from(30)]
    );
    assert_eq!(
        identify.call(args![23]).unwrap(),
        vec![Value::Undefined, Value::from(23)]
    );
    assert_eq!(
        identify.call(args![]).unwrap(),
        vec![Value::Undefined, Value::Undefined]
    );
}

#[test]
fn test_union_slot_scenarios() {
    init_tracing();

    let pet_lister = SlotStack::from_shorthand("[string] [string|array]")
        .unwrap()
        .wrap(|values: Vec<Value>| values);

    assert_eq!(
        pet_lister.call(args!["Joe"]).unwrap(),
        vec![Value::from("Joe"), Value::Undefined]
    );
    assert_eq!(
        pet_lister.call(args!["Sally", "Felix"]).unwrap(),
        vec![Value::from("Sally"), Value::from("Felix")]
    );
    assert_eq!(
        pet_lister.call(args!["Joan", vec!["Glitch", "Widget"]]).unwrap(),
        vec![Value::from("Joan"), Value::from(vec!["Glitch", "Widget"])]
    );
    assert_eq!(
        pet_lister.call(args![vec!["Rover", "Rex"]]).unwrap(),
        vec![Value::Undefined, Value::from(vec!["Rover", "Rex"])]
    );
}

#[test]
fn test_named_slots_with_destructuring_callback() {
    let describe = SlotStack::new()
        .required("name", "string")
        .and_then(|s| s.optional("age", "number"))
        .and_then(|s| s.optional("done", "function"))
        .unwrap()
        .wrap(|values: Vec<Value>| match values.as_slice() {
            [name, Value::Number(age), _] => format!("{name} ({age})"),
            [name, _, _] => format!("{name}"),
            _ => unreachable!("resolved vectors are padded to the stack length"),
        });

    assert_eq!(describe.call(args!["Matt", 30]).unwrap(), "Matt (30)");
    assert_eq!(describe.call(args!["John"]).unwrap(), "John");
    assert!(matches!(
        describe.call(args![30]),
        Err(ArgyError::InvalidInvocation { .. })
    ));
}

#[test]
fn test_each_call_resolves_its_own_arguments() {
    let calls = AtomicUsize::new(0);
    let wrapped = SlotStack::from_shorthand("[string] [number]")
        .unwrap()
        .wrap(|values: Vec<Value>| {
            calls.fetch_add(1, Ordering::SeqCst);
            values
        });

    let first = wrapped.call(args!["a"]).unwrap();
    let second = wrapped.call(args![2]).unwrap();
    assert_eq!(first, vec![Value::from("a"), Value::Undefined]);
    assert_eq!(second, vec![Value::Undefined, Value::from(2)]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_concurrent_invocations_are_independent() {
    init_tracing();

    let wrapped = SlotStack::from_shorthand("[string] [number]")
        .unwrap()
        .wrap(|values: Vec<Value>| values);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let wrapped = &wrapped;
                scope.spawn(move || {
                    let args: Arguments = if i % 2 == 0 {
                        args![format!("caller-{i}")]
                    } else {
                        args![i]
                    };
                    let expected = if i % 2 == 0 {
                        vec![Value::from(format!("caller-{i}")), Value::Undefined]
                    } else {
                        vec![Value::Undefined, Value::from(i)]
                    };
                    for _ in 0..100 {
                        assert_eq!(wrapped.call(args.clone()).unwrap(), expected);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker panicked");
        }
    });
}
