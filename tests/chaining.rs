//! Escenarios de punta a punta usando la fachada `argchain`.

use argchain::{args, chain, configured, raw, signature, unary, with_signature, Bundle, ChainError,
               ChainEventKind, EventSink, InMemoryEventLog, Signature, Term, CONFIG};
use serde_json::{json, Value};
use uuid::Uuid;

fn text(v: Option<&Value>) -> &str {
    v.and_then(Value::as_str).unwrap_or_default()
}

/// Stage que concatena sus parámetros (todos obligatorios) en orden.
fn concat(name: &'static str, params: &'static [&'static str]) -> Term {
    Term::from(with_signature(name, Signature::of(params), move |b| {
        let s: String = params.iter().map(|p| text(b.get(p))).collect();
        Ok(json!(s).into())
    }))
}

fn append(name: &'static str, suffix: &'static str) -> Term {
    Term::from(unary(name, move |v| Ok(json!(format!("{}{}", text(Some(v)), suffix)))))
}

#[test]
fn mixed_chain_matches_direct_composition() {
    let x = append("x", "x");
    let y = append("y", "y");
    let z = append("z", "z");
    let two = concat("two", &["a", "b"]);
    let three = concat("three", &["a", "b", "c"]);

    let seed = (args!("w") | x | y | args!("2")).into_result().unwrap();
    assert_eq!(seed.positional(), &[json!("wxy"), json!("2")]);
    assert_eq!(seed.last_value(), Some(&json!("wxy")));

    let out = chain(seed, vec![two, z, Term::from(args!("3", "4")), three]).unwrap();
    // three(z(two(y(x("w")), "2")), "3", "4")
    assert_eq!(out, Some(json!("wxy2z34")));
}

#[test]
fn stage_can_return_arguments_for_the_next_stage() {
    let prefix1 = unary("prefix1", |v| Ok(json!(format!("1 {}", text(Some(v))))));
    let suffix2 = append("suffix2", " 2");
    let ret_args = with_signature("ret_args", Signature::of(&["x"]), |b| {
        Ok(args!("hello", world = b.get("x").cloned().unwrap_or(Value::Null)).into())
    });
    let accept_args = with_signature("accept_args",
                                     Signature::new().required("hello").optional("world", ""),
                                     |b| Ok(json!(format!("{} {}", text(b.get("hello")), text(b.get("world")))).into()));

    let out = (args!("test") | prefix1 | suffix2 | ret_args | accept_args).value().unwrap();
    assert_eq!(out, Some(json!("hello 1 test 2")));
}

#[test]
fn errors_surface_to_the_caller_unchanged() {
    let fail = raw("fail", |p, _| Err(ChainError::stage("fail", format!("got {} args", p.len()))));
    let err = chain(args!(1, 2), [Term::from(fail), append("never", "!")]).unwrap_err();
    assert_eq!(err, ChainError::stage("fail", "got 2 args"));
}

#[test]
fn global_signature_follows_config() {
    assert_eq!(signature().is_strict(), CONFIG.strict_arity);
}

#[test]
fn configured_chain_records_events() {
    let c = configured(Bundle::of(["w"]), [append("x", "x")]);
    assert_eq!(c.config(), &*CONFIG);
    let mut log = InMemoryEventLog::new();
    let id = Uuid::new_v4();
    let out = c.run_with(id, &mut log).unwrap();
    assert_eq!(out.last_value(), Some(&json!("wx")));
    let events = log.list(id);
    assert!(matches!(events.first().map(|e| &e.kind), Some(ChainEventKind::ChainStarted { term_count: 1, .. })));
    assert!(matches!(events.last().map(|e| &e.kind), Some(ChainEventKind::ChainCompleted { has_value: true, .. })));
}
