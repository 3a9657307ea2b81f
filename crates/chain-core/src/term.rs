//! `Term`: lo que puede aparecer después del seed en una cadena.
//!
//! `Bundle::combine` despacha con un `match` exhaustivo sobre las tres
//! variantes.

use std::sync::Arc;

use serde_json::Value;

use crate::model::Bundle;
use crate::stage::Stage;

#[derive(Debug, Clone)]
pub enum Term {
    /// Argumentos literales que se fusionan con el bundle actual.
    Bundle(Bundle),
    /// Un invocable.
    Stage(Arc<dyn Stage>),
    /// Un valor que no es invocable; combinarlo falla con `NotCallable`.
    Literal(Value),
}

impl Term {
    /// Etiqueta corta para logs y eventos.
    pub fn label(&self) -> String {
        match self {
            Term::Bundle(_) => "<bundle>".to_string(),
            Term::Stage(stage) => stage.name().to_string(),
            Term::Literal(value) => value.to_string(),
        }
    }

    pub fn is_stage(&self) -> bool {
        matches!(self, Term::Stage(_))
    }
}

impl From<Bundle> for Term {
    fn from(bundle: Bundle) -> Self {
        Term::Bundle(bundle)
    }
}

impl From<Value> for Term {
    fn from(value: Value) -> Self {
        Term::Literal(value)
    }
}

impl From<Arc<dyn Stage>> for Term {
    fn from(stage: Arc<dyn Stage>) -> Self {
        Term::Stage(stage)
    }
}

impl<S: Stage + 'static> From<S> for Term {
    fn from(stage: S) -> Self {
        Term::Stage(Arc::new(stage))
    }
}
