//! Macros para construir bundles y correr cadenas sin boilerplate.
//!
//! Exportadas en la raíz del crate:
//!   use chain_core::{args, chain};

/// Construye un `Bundle` con posicionales y keywords mezclados:
///
/// ```
/// let b = chain_core::args!("hello", world = "test");
/// assert_eq!(b.positional().len(), 1);
/// assert_eq!(b.keyword()["world"], "test");
/// ```
#[macro_export]
macro_rules! args {
    () => { $crate::model::Bundle::new() };
    ($($rest:tt)+) => { $crate::__args_munch!($crate::model::Bundle::new(); $($rest)+) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __args_munch {
    ($b:expr;) => { $b };
    ($b:expr; $key:ident = $val:expr $(, $($rest:tt)*)?) => {
        $crate::__args_munch!($b.kwarg(stringify!($key), $val); $($($rest)*)?)
    };
    ($b:expr; $val:expr $(, $($rest:tt)*)?) => {
        $crate::__args_munch!($b.arg($val); $($($rest)*)?)
    };
}

/// `chain!(seed, t1, t2, ...)`: convierte cada término con `Term::from` y
/// llama a `engine::run`.
#[macro_export]
macro_rules! chain {
    ($seed:expr $(, $term:expr)* $(,)?) => {{
        let terms: ::std::vec::Vec<$crate::term::Term> = ::std::vec![$($crate::term::Term::from($term)),*];
        $crate::engine::run($seed, terms)
    }};
}

#[cfg(test)]
mod tests {
    use crate::model::Bundle;
    use crate::stage::unary;
    use serde_json::json;

    #[test]
    fn args_mixes_positional_and_keyword() {
        let world = "test";
        let b = args!("hello", 2, world = world, n = json!([1]));
        assert_eq!(b, Bundle::of([json!("hello"), json!(2)]).kwarg("world", "test").kwarg("n", json!([1])));
        assert_eq!(args!(), Bundle::new());
        assert_eq!(args!("a",), Bundle::of(["a"]));
    }

    #[test]
    fn chain_macro_runs_terms() {
        let up = unary("up", |v| Ok(json!(v.as_str().unwrap_or_default().to_uppercase())));
        assert_eq!(chain!(args!("abc"), up).unwrap(), Some(json!("ABC")));
        assert_eq!(chain!(args!("abc")).unwrap(), None);
    }
}
