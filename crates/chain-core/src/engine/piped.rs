//! Operador `|` sobre bundles.
//!
//! `seed | f | g` combina de izquierda a derecha en el momento, igual que
//! `seed.then(f)?.then(g)?`. Como `combine` puede fallar, el resultado
//! intermedio es un `Piped`; tras el primer error los términos siguientes se
//! descartan sin invocarse.

use std::ops::BitOr;

use serde_json::Value;

use super::run;
use crate::errors::ChainError;
use crate::model::Bundle;
use crate::term::Term;

#[derive(Debug, Clone, PartialEq)]
#[must_use = "a Piped holds the result of the chain so far"]
pub struct Piped(Result<Bundle, ChainError>);

impl Piped {
    pub fn into_result(self) -> Result<Bundle, ChainError> {
        self.0
    }

    pub fn as_result(&self) -> Result<&Bundle, &ChainError> {
        self.0.as_ref()
    }

    /// `last_value` del bundle alcanzado.
    pub fn value(self) -> Result<Option<Value>, ChainError> {
        self.0.map(Bundle::into_last_value)
    }

    /// Usa el bundle alcanzado como seed de `run`.
    pub fn run<I>(self, terms: I) -> Result<Option<Value>, ChainError>
        where I: IntoIterator,
              I::Item: Into<Term>
    {
        run(self.0?, terms)
    }
}

impl From<Piped> for Result<Bundle, ChainError> {
    fn from(piped: Piped) -> Self {
        piped.0
    }
}

impl<T: Into<Term>> BitOr<T> for Bundle {
    type Output = Piped;

    fn bitor(self, rhs: T) -> Piped {
        Piped(self.combine(&rhs.into()))
    }
}

impl<T: Into<Term>> BitOr<T> for Piped {
    type Output = Piped;

    fn bitor(self, rhs: T) -> Piped {
        Piped(self.0.and_then(|bundle| bundle.combine(&rhs.into())))
    }
}
