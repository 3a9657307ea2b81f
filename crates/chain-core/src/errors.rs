//! Errores del core.
//!
//! Un `ChainError` nunca se envuelve ni se reintenta: el error que produce un
//! stage es exactamente el que recibe quien llamó al driver.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ChainError {
    /// Fallo propio de un stage (lo que en otros lenguajes sería una excepción).
    #[error("stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
    /// Se intentó invocar un término que no es invocable (un literal).
    #[error("term is not callable: {term}")]
    NotCallable { term: String },
    #[error("stage '{stage}' takes {expected} positional arguments but {got} were given")]
    TooManyPositional { stage: String, expected: usize, got: usize },
    #[error("stage '{stage}' missing required argument '{name}'")]
    MissingArgument { stage: String, name: String },
    #[error("stage '{stage}' got an unexpected keyword argument '{name}'")]
    UnexpectedKeyword { stage: String, name: String },
    #[error("stage '{stage}' got multiple values for argument '{name}'")]
    MultipleValues { stage: String, name: String },
    #[error("stage '{stage}' could not decode its arguments: {message}")]
    Decode { stage: String, message: String },
    #[error("stage '{stage}' could not encode its result: {message}")]
    Encode { stage: String, message: String },
}

impl ChainError {
    /// Atajo para que un stage reporte su propio fallo.
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        ChainError::StageFailed { stage: stage.into(),
                                  message: message.into() }
    }

    /// Nombre corto de la variante; se usa en logs y eventos.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ChainError::StageFailed { .. } => "StageFailed",
            ChainError::NotCallable { .. } => "NotCallable",
            ChainError::TooManyPositional { .. } => "TooManyPositional",
            ChainError::MissingArgument { .. } => "MissingArgument",
            ChainError::UnexpectedKeyword { .. } => "UnexpectedKeyword",
            ChainError::MultipleValues { .. } => "MultipleValues",
            ChainError::Decode { .. } => "Decode",
            ChainError::Encode { .. } => "Encode",
        }
    }
}
