//! Firma explícita de un stage y binding de argumentos.
//!
//! Binding (mismo orden que una llamada normal con posicionales + keywords):
//! 1. los posicionales llenan los parámetros en orden; el sobrante va a
//!    `rest` si existe, si no es `TooManyPositional` (o se descarta cuando la
//!    firma no es estricta);
//! 2. los keywords se asignan por nombre; repetir uno ya lleno es
//!    `MultipleValues`; los desconocidos van a `extra` o son
//!    `UnexpectedKeyword`;
//! 3. los parámetros sin valor toman su default o es `MissingArgument`.

use std::fmt;

use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Stage, StageOutput};
use crate::config::ChainConfig;
use crate::errors::ChainError;
use crate::model::Keywords;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub default: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    params: Vec<Param>,
    rest: Option<String>,
    extra: Option<String>,
    strict: bool,
}

impl Default for Signature {
    fn default() -> Self {
        Self { params: Vec::new(),
               rest: None,
               extra: None,
               strict: true }
    }
}

impl Signature {
    /// Firma vacía y estricta.
    pub fn new() -> Self {
        Self::default()
    }

    /// Firma con todos los parámetros obligatorios.
    pub fn of(names: &[&str]) -> Self {
        names.iter().fold(Self::new(), |sig, n| sig.required(*n))
    }

    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param { name: name.into(), default: None });
        self
    }

    pub fn optional(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.params.push(Param { name: name.into(),
                                 default: Some(default.into()) });
        self
    }

    /// Recolecta los posicionales sobrantes bajo `name`.
    pub fn rest(mut self, name: impl Into<String>) -> Self {
        self.rest = Some(name.into());
        self
    }

    /// Recolecta los keywords desconocidos bajo `name`.
    pub fn extra(mut self, name: impl Into<String>) -> Self {
        self.extra = Some(name.into());
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Enlaza los argumentos de un bundle contra la firma. `stage` sólo se
    /// usa para nombrar el stage en los errores.
    pub fn bind(&self, stage: &str, positional: &[Value], keyword: &Keywords) -> Result<BoundArgs, ChainError> {
        self.bind_strict(stage, positional, keyword, self.strict)
    }

    /// Como `bind`, pero con `config.strict_arity` desactivado los
    /// posicionales sobrantes se descartan aunque la firma sea estricta.
    pub fn bind_with(&self,
                     stage: &str,
                     positional: &[Value],
                     keyword: &Keywords,
                     config: &ChainConfig)
                     -> Result<BoundArgs, ChainError> {
        self.bind_strict(stage, positional, keyword, self.strict && config.strict_arity)
    }

    fn bind_strict(&self, stage: &str, positional: &[Value], keyword: &Keywords, strict: bool) -> Result<BoundArgs, ChainError> {
        let mut slots: Vec<Option<Value>> = vec![None; self.params.len()];
        let mut rest = Vec::new();

        for (i, value) in positional.iter().enumerate() {
            if i < slots.len() {
                slots[i] = Some(value.clone());
            } else if self.rest.is_some() {
                rest.push(value.clone());
            } else if strict {
                return Err(ChainError::TooManyPositional { stage: stage.to_string(),
                                                           expected: self.params.len(),
                                                           got: positional.len() });
            } else {
                warn!("bind:drop stage={stage} surplus={}", positional.len() - self.params.len());
                break;
            }
        }

        let mut extra = Keywords::new();
        for (name, value) in keyword.iter() {
            match self.params.iter().position(|p| &p.name == name) {
                Some(i) if slots[i].is_some() => {
                    return Err(ChainError::MultipleValues { stage: stage.to_string(),
                                                            name: name.clone() });
                }
                Some(i) => slots[i] = Some(value.clone()),
                None if self.extra.is_some() => {
                    extra.insert(name.clone(), value.clone());
                }
                None => {
                    return Err(ChainError::UnexpectedKeyword { stage: stage.to_string(),
                                                               name: name.clone() });
                }
            }
        }

        let mut values = IndexMap::with_capacity(self.params.len());
        for (param, slot) in self.params.iter().zip(slots) {
            let value = match (slot, &param.default) {
                (Some(v), _) => v,
                (None, Some(default)) => default.clone(),
                (None, None) => {
                    return Err(ChainError::MissingArgument { stage: stage.to_string(),
                                                             name: param.name.clone() });
                }
            };
            values.insert(param.name.clone(), value);
        }

        Ok(BoundArgs { values,
                       rest,
                       extra,
                       rest_name: self.rest.clone(),
                       extra_name: self.extra.clone() })
    }
}

/// Argumentos ya enlazados contra una `Signature`. Todo parámetro declarado
/// tiene valor (explícito o default).
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArgs {
    values: IndexMap<String, Value>,
    rest: Vec<Value>,
    extra: Keywords,
    rest_name: Option<String>,
    extra_name: Option<String>,
}

impl BoundArgs {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn rest(&self) -> &[Value] {
        &self.rest
    }

    pub fn extra(&self) -> &Keywords {
        &self.extra
    }

    /// Objeto JSON con un campo por parámetro, más `rest`/`extra` bajo sus
    /// nombres si la firma los declara.
    pub fn to_object(&self) -> Value {
        let mut obj: serde_json::Map<String, Value> =
            self.values.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        if let Some(name) = &self.rest_name {
            obj.insert(name.clone(), Value::Array(self.rest.clone()));
        }
        if let Some(name) = &self.extra_name {
            let extra = self.extra.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            obj.insert(name.clone(), Value::Object(extra));
        }
        Value::Object(obj)
    }
}

/// Stage cuyo cuerpo recibe los argumentos ya enlazados.
#[derive(Clone)]
pub struct SignatureStage<F> {
    name: String,
    signature: Signature,
    f: F,
}

impl<F> fmt::Debug for SignatureStage<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureStage")
         .field("name", &self.name)
         .field("signature", &self.signature)
         .finish()
    }
}

impl<F> SignatureStage<F> {
    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl<F> Stage for SignatureStage<F>
    where F: Fn(&BoundArgs) -> Result<StageOutput, ChainError> + Send + Sync
{
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, positional: &[Value], keyword: &Keywords) -> Result<StageOutput, ChainError> {
        let bound = self.signature.bind(&self.name, positional, keyword)?;
        (self.f)(&bound)
    }

    fn call_with(&self, positional: &[Value], keyword: &Keywords, config: &ChainConfig) -> Result<StageOutput, ChainError> {
        let bound = self.signature.bind_with(&self.name, positional, keyword, config)?;
        (self.f)(&bound)
    }
}

pub fn with_signature<F>(name: impl Into<String>, signature: Signature, f: F) -> SignatureStage<F>
    where F: Fn(&BoundArgs) -> Result<StageOutput, ChainError> + Send + Sync
{
    SignatureStage { name: name.into(),
                     signature,
                     f }
}
