//! chain-core: composición de funciones sobre bundles de argumentos.
//!
//! Una cadena parte de un `Bundle` (posicionales + keywords) y lo combina,
//! término a término, con stages o con otros bundles. Un stage que devuelve
//! un valor plano lo deja como único argumento del siguiente; uno que
//! devuelve un `Bundle` lo entrega tal cual.
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod macros;
pub mod model;
pub mod stage;
pub mod term;

pub use config::ChainConfig;
pub use engine::{run, Chain, Piped};
pub use errors::ChainError;
pub use event::{ChainEvent, ChainEventKind, EventSink, InMemoryEventLog, NoopSink, Produced};
pub use model::{Bundle, Keywords};
pub use stage::{raw, typed, unary, with_signature, BoundArgs, Signature, Stage, StageOutput};
pub use term::Term;

pub use serde_json::Value;
