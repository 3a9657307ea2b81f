//! argchain: encadenado minimalista de funciones.
//!
//! Re-exporta `chain_core` y agrega los puntos de entrada que usan la
//! configuración global cargada del entorno.
//!
//! ```
//! use argchain::{args, chain, unary, Term};
//! use serde_json::json;
//!
//! let x = unary("x", |v| Ok(json!(format!("{}x", v.as_str().unwrap_or_default()))));
//! let y = unary("y", |v| Ok(json!(format!("{}y", v.as_str().unwrap_or_default()))));
//! let out = chain(args!("w"), [Term::from(x), Term::from(y)]).unwrap();
//! assert_eq!(out, Some(json!("wxy")));
//! ```
pub mod config;

pub use chain_core::*;
pub use config::CONFIG;

/// Corre `seed` a través de `terms` con la configuración global.
pub fn chain<I>(seed: Bundle, terms: I) -> Result<Option<Value>, ChainError>
    where I: IntoIterator,
          I::Item: Into<Term>
{
    configured(seed, terms).run()
}

/// `Chain` con la configuración global y los términos dados, lista para
/// correrse (o para registrar eventos con `run_with`).
pub fn configured<I>(seed: Bundle, terms: I) -> Chain
    where I: IntoIterator,
          I::Item: Into<Term>
{
    terms.into_iter()
         .fold(Chain::new(seed).with_config((*CONFIG).clone()), |c, t| c.then(t))
}

/// Firma vacía cuya aridad sigue `CONFIG.strict_arity`.
pub fn signature() -> Signature {
    CONFIG.signature()
}
