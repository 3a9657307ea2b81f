//! Adaptadores de closures a `Stage`.

use std::fmt;

use serde_json::Value;

use super::{Signature, Stage, StageOutput};
use crate::config::ChainConfig;
use crate::errors::ChainError;
use crate::model::Keywords;

/// Stage a partir de una closure que recibe los argumentos crudos.
#[derive(Clone)]
pub struct FnStage<F> {
    name: String,
    f: F,
}

impl<F> fmt::Debug for FnStage<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStage").field("name", &self.name).finish()
    }
}

impl<F> Stage for FnStage<F>
    where F: Fn(&[Value], &Keywords) -> Result<StageOutput, ChainError> + Send + Sync
{
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, positional: &[Value], keyword: &Keywords) -> Result<StageOutput, ChainError> {
        (self.f)(positional, keyword)
    }
}

/// Construye un `FnStage`. La closure ve los posicionales y keywords tal
/// cual vienen en el bundle, sin binding.
pub fn raw<F>(name: impl Into<String>, f: F) -> FnStage<F>
    where F: Fn(&[Value], &Keywords) -> Result<StageOutput, ChainError> + Send + Sync
{
    FnStage { name: name.into(), f }
}

/// Stage de un único argumento posicional que devuelve un valor plano.
///
/// Es el caso `h(g(f(x)))`: se enlaza contra una firma de un solo parámetro,
/// así que cualquier argumento adicional es un error de aridad.
#[derive(Clone)]
pub struct UnaryStage<F> {
    name: String,
    signature: Signature,
    f: F,
}

impl<F> fmt::Debug for UnaryStage<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryStage").field("name", &self.name).finish()
    }
}

impl<F> UnaryStage<F> {
    /// Ajusta la aridad estricta de la firma interna.
    pub fn strict(mut self, strict: bool) -> Self {
        self.signature = self.signature.strict(strict);
        self
    }
}

impl<F> Stage for UnaryStage<F>
    where F: Fn(&Value) -> Result<Value, ChainError> + Send + Sync
{
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, positional: &[Value], keyword: &Keywords) -> Result<StageOutput, ChainError> {
        let bound = self.signature.bind(&self.name, positional, keyword)?;
        let input = bound.get("value").unwrap_or(&Value::Null);
        (self.f)(input).map(StageOutput::Value)
    }

    fn call_with(&self, positional: &[Value], keyword: &Keywords, config: &ChainConfig) -> Result<StageOutput, ChainError> {
        let bound = self.signature.bind_with(&self.name, positional, keyword, config)?;
        let input = bound.get("value").unwrap_or(&Value::Null);
        (self.f)(input).map(StageOutput::Value)
    }
}

pub fn unary<F>(name: impl Into<String>, f: F) -> UnaryStage<F>
    where F: Fn(&Value) -> Result<Value, ChainError> + Send + Sync
{
    UnaryStage { name: name.into(),
                 signature: Signature::new().required("value"),
                 f }
}
