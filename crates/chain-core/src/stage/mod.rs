//! Stages: los invocables que forman cada eslabón de una cadena.
//!
//! - `Stage`: interfaz neutral usada por `Bundle::combine`.
//! - `StageOutput`: lo que devuelve un stage (valor plano o bundle nuevo).
//! - `FnStage` / `UnaryStage`: adaptadores de closures.
//! - `Signature` / `SignatureStage`: declaración explícita de los parámetros
//!   que consume un stage y el binding de un bundle contra ella.
//! - `TypedStage`: variante con parámetros y salida tipados vía serde.

pub mod definition;
pub mod fn_stage;
pub mod signature;
pub mod typed;

pub use definition::{Stage, StageOutput};
pub use fn_stage::{raw, unary, FnStage, UnaryStage};
pub use signature::{with_signature, BoundArgs, Param, Signature, SignatureStage};
pub use typed::{typed, TypedStage};
