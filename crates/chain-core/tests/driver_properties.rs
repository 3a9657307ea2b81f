use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chain_core::{args, chain, raw, run, unary, with_signature, Bundle, Chain, ChainError, Signature, Term};
use serde_json::{json, Value};

fn suffix(s: &'static str) -> Term {
    Term::from(unary(s, move |v| Ok(json!(format!("{}{}", v.as_str().unwrap_or_default(), s)))))
}

#[test]
fn wxy_scenario() {
    assert_eq!(chain!(args!("w"), suffix("x"), suffix("y")).unwrap(), Some(json!("wxy")));
}

fn inc(x: i64) -> i64 {
    x + 1
}

fn tenfold(x: i64) -> i64 {
    x * 10
}

fn minus3(x: i64) -> i64 {
    x - 3
}

fn int_stage(name: &'static str, op: fn(i64) -> i64) -> Term {
    Term::from(unary(name, move |v| Ok(json!(op(v.as_i64().unwrap_or_default())))))
}

#[test]
fn driver_equals_direct_composition() {
    for x in [-5i64, 0, 7, 123] {
        let out = chain!(args!(x), int_stage("f", inc), int_stage("g", tenfold), int_stage("h", minus3)).unwrap();
        assert_eq!(out, Some(json!(minus3(tenfold(inc(x))))));
    }
}

#[test]
fn rebundled_stage_feeds_next_stage_with_keywords() {
    let seen: Arc<Mutex<Vec<(Vec<Value>, Vec<(String, Value)>)>>> = Arc::default();
    let rec = seen.clone();
    let ret_args = raw("ret_args", |_, _| Ok(args!("hello", world = "test").into()));
    let next = raw("next", move |p, k| {
        rec.lock().unwrap().push((p.to_vec(), k.iter().map(|(k, v)| (k.clone(), v.clone())).collect()));
        Ok(json!("done").into())
    });
    assert_eq!(chain!(args!(0), ret_args, next).unwrap(), Some(json!("done")));
    let calls = seen.lock().unwrap();
    assert_eq!(calls.as_slice(), &[(vec![json!("hello")], vec![("world".to_string(), json!("test"))])]);
}

#[test]
fn failing_stage_aborts_remaining_stages() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = |name: &'static str| {
        let c = calls.clone();
        raw(name, move |p, _| {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(p.first().cloned().unwrap_or(Value::Null).into())
        })
    };
    let fail = raw("fail", |_, _| Err(ChainError::stage("fail", "exploded")));
    let err = chain!(args!(1), counter("a"), fail, counter("b"), counter("c")).unwrap_err();
    assert_eq!(err, ChainError::stage("fail", "exploded"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn arity_failure_is_a_stage_failure() {
    let pair = with_signature("pair", Signature::of(&["a", "b"]), |b| {
        Ok(json!([b.get("a"), b.get("b")]).into())
    });
    let err = chain!(args!(1, 2, 3), pair).unwrap_err();
    assert_eq!(err, ChainError::TooManyPositional { stage: "pair".into(), expected: 2, got: 3 });
}

#[test]
fn empty_chain_returns_seed_last_value() {
    assert_eq!(run(args!("x"), Vec::<Term>::new()).unwrap(), None);
    let computed = args!("w").then(suffix("x")).unwrap();
    assert_eq!(run(computed, Vec::<Term>::new()).unwrap(), Some(json!("wx")));
}

#[test]
fn literal_term_fails_as_not_callable() {
    let err = chain!(args!(1), suffix("x"), json!(5), suffix("y")).unwrap_err();
    assert_eq!(err, ChainError::NotCallable { term: "5".into() });
}

#[test]
fn one_chain_runs_concurrently_from_the_same_seed() {
    let chain = Chain::new(Bundle::of(["s"])).then(suffix("x")).then(suffix("y"));
    let handles: Vec<_> = (0..4).map(|_| {
                                    let c = chain.clone();
                                    std::thread::spawn(move || c.run())
                                })
                                .collect();
    for h in handles {
        assert_eq!(h.join().unwrap().unwrap(), Some(json!("sxy")));
    }
    assert_eq!(chain.seed(), &Bundle::of(["s"]));
}
