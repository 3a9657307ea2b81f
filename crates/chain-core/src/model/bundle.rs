//! `Bundle`: argumentos posicionales + keywords que recibe el próximo stage,
//! más el último valor calculado por la cadena.
//!
//! Un bundle es lógicamente inmutable. `combine` toma `&self` y siempre
//! devuelve un bundle nuevo, con su propia copia del mapa de keywords.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::merge::merge_keywords;
use crate::config::ChainConfig;
use crate::constants::BUNDLE_FORMAT_VERSION;
use crate::errors::ChainError;
use crate::event::Produced;
use crate::hashing::hash_value;
use crate::stage::StageOutput;
use crate::term::Term;

/// Argumentos con nombre. El orden de inserción se conserva para mostrar y
/// serializar, pero la igualdad no depende de él.
pub type Keywords = IndexMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    positional: Vec<Value>,
    keyword: Keywords,
    last_value: Option<Value>,
}

impl Bundle {
    /// Bundle vacío, sin valor calculado.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle con los posicionales dados y sin keywords.
    pub fn of<I, V>(positional: I) -> Self
        where I: IntoIterator<Item = V>,
              V: Into<Value>
    {
        Self { positional: positional.into_iter().map(Into::into).collect(),
               ..Self::default() }
    }

    pub fn from_parts(positional: Vec<Value>, keyword: Keywords) -> Self {
        Self { positional,
               keyword,
               last_value: None }
    }

    /// Añade un posicional (construcción, consume `self`).
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Añade (o reemplaza) un keyword (construcción, consume `self`).
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn keyword(&self) -> &Keywords {
        &self.keyword
    }

    /// Último valor plano producido por un stage; `None` si este bundle nunca
    /// pasó por un stage que devolviera un valor.
    pub fn last_value(&self) -> Option<&Value> {
        self.last_value.as_ref()
    }

    pub fn into_last_value(self) -> Option<Value> {
        self.last_value
    }

    /// Envuelve el valor devuelto por un stage: único posicional y valor
    /// calculado a la vez.
    pub(crate) fn wrap_value(value: Value) -> Self {
        Self { positional: vec![value.clone()],
               keyword: Keywords::new(),
               last_value: Some(value) }
    }

    /// Combina este bundle con un término y devuelve el bundle siguiente.
    ///
    /// - `Term::Bundle`: concatena posicionales, fusiona keywords (gana el
    ///   derecho) y conserva el `last_value` de `self`.
    /// - `Term::Stage`: invoca el stage con los argumentos de `self`. Si el
    ///   stage devuelve un bundle se usa tal cual; si devuelve un valor se
    ///   envuelve con `wrap_value`.
    /// - `Term::Literal`: no es invocable, falla con `NotCallable`.
    ///
    /// Los errores del stage se devuelven sin tocar.
    pub fn combine(&self, term: &Term) -> Result<Bundle, ChainError> {
        self.combine_with(term, &ChainConfig::default())
    }

    /// `combine` bajo una config explícita; los stages con firma la usan
    /// para decidir la aridad (`ChainConfig::strict_arity`).
    pub fn combine_with(&self, term: &Term, config: &ChainConfig) -> Result<Bundle, ChainError> {
        self.combine_traced(term, config).map(|(bundle, _)| bundle)
    }

    /// Versión fluida de `combine` que acepta cualquier cosa convertible a
    /// `Term`.
    pub fn then(&self, term: impl Into<Term>) -> Result<Bundle, ChainError> {
        self.combine(&term.into())
    }

    /// Igual que `combine`, pero informa además qué camino se tomó. El
    /// driver lo usa para registrar eventos.
    pub(crate) fn combine_traced(&self, term: &Term, config: &ChainConfig) -> Result<(Bundle, Produced), ChainError> {
        match term {
            Term::Bundle(other) => {
                let mut positional = Vec::with_capacity(self.positional.len() + other.positional.len());
                positional.extend(self.positional.iter().cloned());
                positional.extend(other.positional.iter().cloned());
                let merged = Bundle { positional,
                                      keyword: merge_keywords(&self.keyword, &other.keyword),
                                      last_value: self.last_value.clone() };
                debug!("combine:merge positional={} keyword={}",
                       merged.positional.len(),
                       merged.keyword.len());
                Ok((merged, Produced::Merged))
            }
            Term::Stage(stage) => {
                debug!("combine:invoke stage={} positional={} keyword={}",
                       stage.name(),
                       self.positional.len(),
                       self.keyword.len());
                match stage.call_with(&self.positional, &self.keyword, config)? {
                    StageOutput::Bundle(bundle) => Ok((bundle, Produced::Bundle)),
                    StageOutput::Value(value) => Ok((Bundle::wrap_value(value), Produced::Value)),
                }
            }
            Term::Literal(value) => {
                debug!("combine:not-callable literal={value}");
                Err(ChainError::NotCallable { term: value.to_string() })
            }
        }
    }

    /// Fingerprint estable del contenido (posicionales, keywords sin importar
    /// el orden de inserción, y valor calculado).
    pub fn fingerprint(&self) -> String {
        let keyword: serde_json::Map<String, Value> =
            self.keyword.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        hash_value(&json!({
            "format": BUNDLE_FORMAT_VERSION,
            "positional": self.positional,
            "keyword": keyword,
            "last_value": self.last_value,
        }))
    }
}

impl From<Vec<Value>> for Bundle {
    fn from(positional: Vec<Value>) -> Self {
        Bundle::from_parts(positional, Keywords::new())
    }
}
