//! Propiedades de `Bundle::combine` (merge e invocación).

use chain_core::{args, raw, unary, Bundle, ChainError, StageOutput, Term};
use serde_json::{json, Value};

fn bundles() -> Vec<Bundle> {
    vec![Bundle::new(),
         args!(1),
         args!("a", "b", k = 1),
         args!(json!({"x": [1, 2]}), z = "z", k = 2),
         Bundle::of(["w"]).then(unary("x", |v| Ok(json!(format!("{}x", v.as_str().unwrap_or_default())))))
                          .unwrap()]
}

#[test]
fn merge_concatenates_positionals_in_order() {
    for a in bundles() {
        for b in bundles() {
            let merged = a.combine(&Term::from(b.clone())).unwrap();
            let expected: Vec<Value> = a.positional().iter().chain(b.positional()).cloned().collect();
            assert_eq!(merged.positional(), expected.as_slice());
        }
    }
}

#[test]
fn merge_right_keyword_wins_and_left_value_is_kept() {
    for a in bundles() {
        for b in bundles() {
            let merged = a.combine(&Term::from(b.clone())).unwrap();
            for (k, v) in b.keyword() {
                assert_eq!(&merged.keyword()[k], v);
            }
            for (k, v) in a.keyword() {
                if !b.keyword().contains_key(k) {
                    assert_eq!(&merged.keyword()[k], v);
                }
            }
            assert_eq!(merged.last_value(), a.last_value());
        }
    }
}

#[test]
fn plain_return_is_wrapped() {
    let f = raw("f", |p, _| Ok(json!(p.len()).into()));
    for a in bundles() {
        let out = a.then(f.clone()).unwrap();
        let v = json!(a.positional().len());
        assert_eq!(out.last_value(), Some(&v));
        assert_eq!(out.positional(), &[v]);
        assert!(out.keyword().is_empty());
    }
}

#[test]
fn bundle_return_passes_through_verbatim() {
    let r = args!("hello", world = "test");
    let returned = r.clone();
    let f = raw("rebundle", move |_, _| Ok(StageOutput::Bundle(returned.clone())));
    for a in bundles() {
        assert_eq!(a.then(f.clone()).unwrap(), r);
    }
}

#[test]
fn combine_does_not_mutate_either_side() {
    let a = args!("a", k = 1);
    let b = args!("b", k = 2);
    let (a0, b0) = (a.clone(), b.clone());
    let _ = a.combine(&Term::from(b.clone())).unwrap();
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn stage_error_propagates_unchanged() {
    let err = ChainError::stage("f", "bad input");
    let e2 = err.clone();
    let f = raw("f", move |_, _| Err(e2.clone()));
    assert_eq!(args!(1).then(f), Err(err));
}
