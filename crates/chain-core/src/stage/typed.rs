use std::fmt;
use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::{Signature, Stage, StageOutput};
use crate::config::ChainConfig;
use crate::errors::ChainError;
use crate::model::Keywords;

/// Stage con parámetros y salida fuertemente tipados.
///
/// Los argumentos se enlazan contra la firma, se convierten a un objeto JSON
/// (`BoundArgs::to_object`) y se deserializan en `P`. La salida `R` se
/// serializa a un valor plano; un `TypedStage` nunca devuelve un bundle.
pub struct TypedStage<P, R, F> {
    name: String,
    signature: Signature,
    f: F,
    _io: PhantomData<fn(P) -> R>,
}

impl<P, R, F> fmt::Debug for TypedStage<P, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedStage")
         .field("name", &self.name)
         .field("params", &std::any::type_name::<P>())
         .field("output", &std::any::type_name::<R>())
         .finish()
    }
}

impl<P, R, F> Stage for TypedStage<P, R, F>
    where P: DeserializeOwned,
          R: Serialize,
          F: Fn(P) -> Result<R, ChainError> + Send + Sync
{
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, positional: &[Value], keyword: &Keywords) -> Result<StageOutput, ChainError> {
        self.call_with(positional, keyword, &ChainConfig::default())
    }

    fn call_with(&self, positional: &[Value], keyword: &Keywords, config: &ChainConfig) -> Result<StageOutput, ChainError> {
        let bound = self.signature.bind_with(&self.name, positional, keyword, config)?;
        let params: P = serde_json::from_value(bound.to_object()).map_err(|e| ChainError::Decode { stage: self.name.clone(),
                                                                                               message: e.to_string() })?;
        let out = (self.f)(params)?;
        serde_json::to_value(out).map(StageOutput::Value)
                                 .map_err(|e| ChainError::Encode { stage: self.name.clone(),
                                                                   message: e.to_string() })
    }
}

pub fn typed<P, R, F>(name: impl Into<String>, signature: Signature, f: F) -> TypedStage<P, R, F>
    where P: DeserializeOwned,
          R: Serialize,
          F: Fn(P) -> Result<R, ChainError> + Send + Sync
{
    TypedStage { name: name.into(),
                 signature,
                 f,
                 _io: PhantomData }
}
