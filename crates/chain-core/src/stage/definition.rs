use std::fmt::Debug;

use serde_json::Value;

use crate::config::ChainConfig;
use crate::errors::ChainError;
use crate::model::{Bundle, Keywords};

/// Resultado de invocar un stage.
///
/// `Bundle` permite a un stage entregar al siguiente varios argumentos
/// (posicionales y keywords) en lugar de un único valor.
#[derive(Debug, Clone, PartialEq)]
pub enum StageOutput {
    Value(Value),
    Bundle(Bundle),
}

impl From<Value> for StageOutput {
    fn from(value: Value) -> Self {
        StageOutput::Value(value)
    }
}

impl From<Bundle> for StageOutput {
    fn from(bundle: Bundle) -> Self {
        StageOutput::Bundle(bundle)
    }
}

/// Trait que define un stage.
///
/// `Send + Sync` para que una misma cadena pueda ejecutarse desde varios
/// hilos a partir del mismo seed.
pub trait Stage: Send + Sync + Debug {
    /// Nombre usado en errores, logs y eventos.
    fn name(&self) -> &str;

    /// Invoca el stage con los argumentos del bundle actual.
    fn call(&self, positional: &[Value], keyword: &Keywords) -> Result<StageOutput, ChainError>;

    /// Invocación bajo la config del driver. Los stages con firma la usan
    /// para relajar la aridad; el resto la ignora.
    fn call_with(&self, positional: &[Value], keyword: &Keywords, _config: &ChainConfig) -> Result<StageOutput, ChainError> {
        self.call(positional, keyword)
    }
}
